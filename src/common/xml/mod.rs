//! XML text helpers shared by the element tree and the typed elements.

mod escape;

pub use escape::{escape_attr, escape_text, is_xml_char};
