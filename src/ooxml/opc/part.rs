/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the fundamental units of content in an OPC package, each with a
/// unique partname and a content type. Relationship bookkeeping, the
/// content-type registry and ZIP I/O belong to the package layer that owns
/// the parts.
use crate::ooxml::opc::packuri::PackURI;
use std::borrow::Cow;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part as it would be written to the package.
    fn blob(&self) -> Cow<'_, [u8]>;
}

/// The XML declaration written at the head of every XML part.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Prefix a serialized part root with the standard declaration.
pub(crate) fn xml_part_blob(body: &str) -> Vec<u8> {
    let mut xml = String::with_capacity(XML_DECLARATION.len() + 2 + body.len());
    xml.push_str(XML_DECLARATION);
    xml.push_str("\r\n");
    xml.push_str(body);
    xml.into_bytes()
}
