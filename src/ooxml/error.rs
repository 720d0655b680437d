/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// XML parsing error, or an element of the wrong kind
    #[error("XML error: {0}")]
    Xml(String),

    /// A required attribute is missing or does not hold a valid value
    #[error("Malformed <{element}>: required attribute {attribute} is missing or invalid")]
    MalformedElement {
        element: &'static str,
        attribute: &'static str,
    },

    /// Caller-supplied value outside the schema's domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A comment with this id already exists in the container
    #[error("Duplicate comment id: {0}")]
    DuplicateId(u32),

    /// A body marker references a comment id that the container does not hold
    #[error("Comment marker references unknown comment id {0}")]
    DanglingMarker(u32),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
