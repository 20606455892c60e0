use std::fmt;

use crate::zillow::ZillowError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, Zillow).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DbError(String),
    Upstream(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::Upstream(msg) => write!(f, "Upstream Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<rusqlite::Error> for ServerError {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::DbError(err.to_string())
    }
}

impl From<ZillowError> for ServerError {
    fn from(err: ZillowError) -> Self {
        match err {
            // A name absent from the operation table is the caller's mistake,
            // not an upstream failure.
            ZillowError::UnknownOperation(name) => {
                ServerError::BadRequest(format!("Unknown Zillow operation: {name}"))
            }
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
