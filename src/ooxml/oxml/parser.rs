//! Parse XML bytes into an [`XmlElement`] tree.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::element::XmlElement;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Parse the root element of an XML document or fragment.
///
/// The XML declaration, comments, processing instructions and any
/// whitespace outside the root are skipped. Text inside the root is kept
/// verbatim, including whitespace between elements, so the tree
/// serializes back to the same content.
pub fn parse_xml(bytes: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(element_from_start(&e)?);
            },
            Event::Empty(e) => {
                let element = element_from_start(&e)?;
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    None => return Ok(element),
                }
            },
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.append_child(element),
                        // This is the root element
                        None => return Ok(element),
                    }
                }
            },
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.decode().map_err(quick_xml::Error::from)?;
                    current.push_text(&text);
                }
            },
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    push_reference(current, &e)?;
                }
            },
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.decode().map_err(quick_xml::Error::from)?;
                    current.push_text(&text);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    if stack.is_empty() {
        Err(OoxmlError::Xml("No root element found".to_string()))
    } else {
        Err(OoxmlError::Xml("Unexpected end of document".to_string()))
    }
}

/// Append the text a `&...;` reference stands for.
fn push_reference(current: &mut XmlElement, reference: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = reference.resolve_char_ref()? {
        let mut utf8 = [0u8; 4];
        current.push_text(ch.encode_utf8(&mut utf8));
        return Ok(());
    }

    let name = reference.decode().map_err(quick_xml::Error::from)?;
    match resolve_predefined_entity(&name) {
        Some(text) => {
            current.push_text(text);
            Ok(())
        },
        None => Err(OoxmlError::Xml(format!("Unknown reference '&{};'", name))),
    }
}

fn element_from_start(e: &BytesStart<'_>) -> Result<XmlElement> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| OoxmlError::Xml(format!("Invalid UTF-8 in tag name: {}", err)))?
        .to_string();
    let mut element = XmlElement::new(name);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| OoxmlError::Xml(format!("Invalid UTF-8 in attribute key: {}", err)))?;
        let value = attr.unescape_value()?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::XmlNode;

    #[test]
    fn test_parse_skips_prolog() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<!-- generated -->
<w:comments xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
        let root = parse_xml(xml).unwrap();
        assert_eq!(root.name(), "w:comments");
        assert_eq!(
            root.attribute("xmlns:w"),
            Some("http://schemas.openxmlformats.org/wordprocessingml/2006/main")
        );
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_parse_decodes_references() {
        let xml = r#"<w:t a="x &amp; &quot;y&quot;">Fish &amp; chips &#x4E2D;&#25991; <![CDATA[<raw>]]></w:t>"#;
        let t = parse_xml(xml.as_bytes()).unwrap();
        assert_eq!(t.attribute("a"), Some("x & \"y\""));
        assert_eq!(t.text(), "Fish & chips 中文 <raw>");
        assert_eq!(t.children().len(), 1);

        let note = parse_xml(br#"<w:comment w:author="line&#10;break &lt;A&gt;"/>"#).unwrap();
        assert_eq!(note.attribute("w:author"), Some("line\nbreak <A>"));
    }

    #[test]
    fn test_parse_preserves_mixed_content() {
        let xml = "<w:p>\n  <w:r><w:t xml:space=\"preserve\"> a </w:t></w:r>\n</w:p>";
        let p = parse_xml(xml.as_bytes()).unwrap();
        assert!(matches!(&p.children()[0], XmlNode::Text(t) if t == "\n  "));
        assert_eq!(p.child_elements().count(), 1);
        assert_eq!(p.to_xml(), xml);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_xml(b""), Err(OoxmlError::Xml(_))));
        assert!(matches!(parse_xml(b"<a><b></a>"), Err(OoxmlError::Xml(_))));
        assert!(matches!(parse_xml(b"<a>"), Err(OoxmlError::Xml(_))));
        assert!(matches!(parse_xml(b"<a>&bogus;</a>"), Err(OoxmlError::Xml(_))));
    }
}
