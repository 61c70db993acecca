use lambda_http::{Body, Error, Request, RequestExt, Response};
use repository::crew::CrewRepository;
use response::{bad_request, ok, server_error};
use serde_json::json;

pub(crate) async fn function_handler(
    repository: &CrewRepository,
    event: Request,
) -> Result<Response<Body>, Error> {
    tracing::info!("Event: {:?}", event);

    let path_parameters = event.path_parameters();
    match (
        path_parameters.first("role"),
        path_parameters.first("movieId"),
    ) {
        (Some(role), Some(movie_id)) if !role.is_empty() && !movie_id.is_empty() => {
            match repository.get(role.to_string(), movie_id.to_string()).await {
                Ok(crew) => {
                    let names: Vec<String> = crew.into_iter().map(|member| member.name).collect();
                    Ok(ok(json!({ "names": names })))
                }
                Err(err) => {
                    tracing::error!("Error querying DynamoDB: {:?}", err);
                    Ok(server_error("Internal Server Error".to_string()))
                }
            }
        }
        _ => Ok(bad_request(
            "Missing role or movieId in the request path".to_string(),
        )),
    }
}
