use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug)]
pub struct CrewMember {
    pub role: String,
    #[serde(rename = "movieId")]
    pub movie_id: String,
    pub name: String,
}

impl CrewMember {
    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> CrewMember {
        CrewMember {
            role: item["role"]
                .as_s()
                .expect("role attribute is missing in the crew entry")
                .to_owned(),
            movie_id: item["movieId"]
                .as_s()
                .expect("movieId attribute is missing in the crew entry")
                .to_owned(),
            name: item["name"]
                .as_s()
                .expect("name attribute is missing in the crew entry")
                .to_owned(),
        }
    }
}
