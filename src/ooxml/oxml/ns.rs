//! Namespace prefix table for the WordprocessingML vocabulary.
//!
//! The table is built at compile time and never mutated.

use phf::{Map, phf_map};

static PREFIX_TO_URI: Map<&'static str, &'static str> = phf_map! {
    "mc" => "http://schemas.openxmlformats.org/markup-compatibility/2006",
    "r" => "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    "w" => "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    "w14" => "http://schemas.microsoft.com/office/word/2010/wordml",
    "xml" => "http://www.w3.org/XML/1998/namespace",
};

/// Look up the namespace URI bound to a well-known prefix.
#[inline]
pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    PREFIX_TO_URI.get(prefix).copied()
}
