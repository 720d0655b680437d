//! Constant values related to the Open Packaging Convention.
//!
//! Content type URIs, XML namespaces and relationship types for the
//! comments part and the document part that refers to it.

/// Content type URIs (like MIME-types) that specify a part's format
pub mod content_type {
    // WordprocessingML content types
    pub const WML_COMMENTS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.comments+xml";
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
}

/// XML namespace URIs
pub mod namespace {
    pub const MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
    pub const OFC_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const WML_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
}

/// Relationship type URIs
pub mod relationship_type {
    pub const COMMENTS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/comments";
}

/// Well-known part names
pub mod partname {
    pub const WML_COMMENTS: &str = "/word/comments.xml";
    pub const WML_DOCUMENT: &str = "/word/document.xml";
}
