use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into the JSON error response the API serves.
/// Server-side failures get logged here, right before the generic reply
/// goes out.
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::DbError(msg) => (500, format!("Database Error: {msg}")),
        ServerError::Upstream(msg) => (502, format!("Upstream Error: {msg}")),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    if status >= 500 {
        eprintln!("Request failed: {err}");
    }

    let body = json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}
