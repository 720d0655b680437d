//! In-memory XML tree used by the WordprocessingML element types.
//!
//! A parser from bytes to an owned tree, a serializer back to text, and the
//! navigation and mutation helpers the typed elements are built on. Element
//! and attribute names belong to [`crate::ooxml::docx::elements`].

pub mod element;
pub mod ns;
pub mod parser;

pub use element::{XmlElement, XmlNode};
pub use ns::namespace_uri;
pub use parser::parse_xml;
