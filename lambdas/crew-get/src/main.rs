use handler::function_handler;
use lambda_http::{run, service_fn, Error};
use repository::crew::CrewRepository;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let shared_config = aws_config::load_from_env().await;
    let repository_ref = &CrewRepository::new(&shared_config);

    run(service_fn(move |event| {
        function_handler(repository_ref, event)
    }))
    .await?;
    Ok(())
}
