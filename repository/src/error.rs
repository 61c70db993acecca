use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("DynamoDB query failed: {0}")]
    Query(#[from] SdkError<QueryError>),
}
