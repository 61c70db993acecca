use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use maplit::hashmap;
use model::crew::CrewMember;
use std::env;

use crate::error::RepositoryError;

pub const ROLE_MOVIE_INDEX: &str = "RoleMovieIndex";

pub struct CrewRepository {
    client: Client,
    table_name: String,
}

impl CrewRepository {
    pub fn new(shared_config: &SdkConfig) -> CrewRepository {
        CrewRepository::with_client(
            Client::new(shared_config),
            env::var("CREW_TABLE").expect("CREW_TABLE environment variable is not set"),
        )
    }

    pub fn with_client(client: Client, table_name: String) -> CrewRepository {
        CrewRepository { client, table_name }
    }

    pub async fn get(
        &self,
        role: String,
        movie_id: String,
    ) -> Result<Vec<CrewMember>, RepositoryError> {
        let attribute_values = hashmap! {
            ":role".to_string() => AttributeValue::S(role),
            ":movieId".to_string() => AttributeValue::S(movie_id),
        };

        let response = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(ROLE_MOVIE_INDEX)
            // `role` is a DynamoDB reserved word and has to be aliased
            .key_condition_expression("#role = :role AND movieId = :movieId")
            .expression_attribute_names("#role", "role")
            .set_expression_attribute_values(Some(attribute_values))
            .send()
            .await?;

        tracing::info!("Query result: {:?}", response);

        let crew = response
            .items()
            .iter()
            .map(CrewMember::from_dynamo_item)
            .collect();

        Ok(crew)
    }
}
