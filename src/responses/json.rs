use astra::{Body, ResponseBuilder};
use serde::Serialize;

use crate::errors::ServerError;
use crate::responses::ResultResp;

/// Serialize `value` as the JSON body of a response.
pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// A bodyless response, used by the delete endpoints.
pub fn empty_response(status: u16) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
