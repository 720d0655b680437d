//! Typed WordprocessingML comment elements.
//!
//! Each type wraps an [`XmlElement`] and owns the attribute contract of one
//! schema element:
//!
//! | Type                 | Element                  | Lives in          |
//! |----------------------|--------------------------|-------------------|
//! | [`CommentsElement`]  | `w:comments`             | comments part     |
//! | [`CommentElement`]   | `w:comment`              | comments part     |
//! | [`CommentRangeStart`]| `w:commentRangeStart`    | document body     |
//! | [`CommentRangeEnd`]  | `w:commentRangeEnd`      | document body     |
//! | [`CommentReference`] | `w:commentReference`     | document body run |
//!
//! Elements and attributes are matched by their `w:`-qualified names, the
//! prefix Word writes. Parts that bind the WordprocessingML namespace to
//! another prefix are rejected when wrapped.

mod comments;
mod markers;

pub use comments::{CommentElement, CommentsElement};
pub use markers::{CommentRangeEnd, CommentRangeStart, CommentReference};

pub(crate) use comments::{W_P, W_R};
pub(crate) use markers::{W_COMMENT_RANGE_END, W_COMMENT_RANGE_START, W_COMMENT_REFERENCE};

use crate::common::xml::is_xml_char;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::XmlElement;

pub(crate) const W_ID: &str = "w:id";

/// Read the required `w:id` attribute of `element`.
pub(crate) fn parse_id(element: &XmlElement, tag: &'static str) -> Result<u32> {
    element
        .attribute(W_ID)
        .and_then(|value| atoi_simd::parse::<u32>(value.as_bytes()).ok())
        .ok_or(OoxmlError::MalformedElement {
            element: tag,
            attribute: W_ID,
        })
}

/// Reject a value holding a character that XML 1.0 cannot carry.
pub(crate) fn check_xml_value(field: &str, value: &str) -> Result<()> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(OoxmlError::InvalidArgument(format!(
            "comment {} contains U+{:04X}, which is not allowed in XML",
            field, c as u32
        ))),
        None => Ok(()),
    }
}

pub(crate) fn unexpected_element(expected: &str, found: &XmlElement) -> OoxmlError {
    OoxmlError::Xml(format!("Expected <{}>, found <{}>", expected, found.name()))
}
