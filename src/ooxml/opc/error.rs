/// Error types for OPC package operations
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    #[error("Invalid content type for {partname}: expected {expected}, got {got}")]
    InvalidContentType {
        partname: String,
        expected: &'static str,
        got: String,
    },

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
