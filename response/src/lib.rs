use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::json;

pub fn ok<T>(body: T) -> Response<Body>
where
    T: Serialize,
{
    json_response(200, json!(body).to_string())
}

/// 400 with the message wrapped in an `{"error": ...}` body.
pub fn bad_request(message: String) -> Response<Body> {
    json_response(400, json!({ "error": message }).to_string())
}

/// 500 with the message wrapped in an `{"error": ...}` body.
pub fn server_error(message: String) -> Response<Body> {
    json_response(500, json!({ "error": message }).to_string())
}

fn json_response(status: u16, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
        .body(Body::Text(body))
        .expect("failed to render response")
}
