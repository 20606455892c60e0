use std::error::Error;
use std::fmt;

/// One variant per pipeline stage: transport, status check, parse, unwrap,
/// plus the operation-table lookup.
#[derive(Debug)]
pub enum ZillowError {
    Network(String),
    HttpStatus(u16),
    XmlParse(String),
    MissingResult(String),
    UnknownOperation(String),
}

impl fmt::Display for ZillowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZillowError::Network(msg) => write!(f, "Network error: {msg}"),
            ZillowError::HttpStatus(status) => write!(f, "Zillow returned HTTP {status}"),
            ZillowError::XmlParse(msg) => write!(f, "XML parse error: {msg}"),
            ZillowError::MissingResult(tag) => {
                write!(f, "Response missing result tag <{tag}>")
            }
            ZillowError::UnknownOperation(name) => {
                write!(f, "Unknown Zillow operation: {name}")
            }
        }
    }
}

impl Error for ZillowError {}
