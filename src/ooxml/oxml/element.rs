//! Owned XML element tree.
//!
//! Names are kept exactly as written (`w:comment`), attribute order is
//! preserved and namespace declarations are stored as ordinary `xmlns:*`
//! attributes, so a parsed part serializes back to the same shape.

use crate::common::xml::{escape_attr, escape_text};
use crate::ooxml::oxml::ns;
use smallvec::SmallVec;

/// Attribute storage. Most WordprocessingML elements carry very few attributes.
pub type Attributes = SmallVec<[(String, String); 4]>;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlNode {
    /// The element, if this node is one.
    #[inline]
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        }
    }

    /// Mutable access to the element, if this node is one.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        }
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        XmlNode::Element(element)
    }
}

/// An XML element with its attributes and mixed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Attributes,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element with a qualified name such as `w:p`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`append_child`](Self::append_child).
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.append_child(child);
        self
    }

    /// Builder form of [`push_text`](Self::push_text).
    pub fn with_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    /// The qualified name as written.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// The namespace prefix, if the name has one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Whether this element has the given qualified name.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Get an attribute value by qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Set an attribute, replacing the value in place if it already exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(pos).1)
    }

    /// Reorder attributes so that the names in `order` come first, in that order.
    ///
    /// Namespace declarations stay ahead of everything else; attributes not
    /// listed keep their relative order after the listed ones.
    pub fn order_attributes(&mut self, order: &[&str]) {
        let rank = |key: &str| {
            if key == "xmlns" || key.starts_with("xmlns:") {
                0
            } else {
                order
                    .iter()
                    .position(|name| *name == key)
                    .map_or(order.len() + 1, |pos| pos + 1)
            }
        };
        self.attributes.sort_by_key(|(key, _)| rank(key.as_str()));
    }

    /// Declare a well-known namespace prefix on this element.
    ///
    /// Returns `false` when the prefix is not in the namespace table. The
    /// reserved `xml` prefix is never declared.
    pub fn declare_namespace(&mut self, prefix: &str) -> bool {
        if prefix == "xml" {
            return true;
        }
        match ns::namespace_uri(prefix) {
            Some(uri) => {
                self.set_attribute(format!("xmlns:{}", prefix), uri);
                true
            },
            None => false,
        }
    }

    /// All child nodes, including text.
    #[inline]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Mutable direct child elements, skipping text.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut XmlElement> {
        self.children.iter_mut().filter_map(XmlNode::as_element_mut)
    }

    /// First direct child element with the given qualified name.
    pub fn find_child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.is(name))
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Insert a node at `index` among all children (text included).
    ///
    /// An index past the end appends.
    pub fn insert_child(&mut self, index: usize, node: XmlNode) {
        let index = index.min(self.children.len());
        self.children.insert(index, node);
    }

    /// Append character data, merging with a trailing text node.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(XmlNode::Text(existing)) => existing.push_str(text),
            _ => self.children.push(XmlNode::Text(text.to_string())),
        }
    }

    /// Keep only the children for which `keep` returns true.
    pub fn retain_children<F>(&mut self, keep: F)
    where
        F: FnMut(&XmlNode) -> bool,
    {
        self.children.retain(keep);
    }

    /// Remove every child node.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Move all child nodes out, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<XmlNode> {
        std::mem::take(&mut self.children)
    }

    /// Concatenated direct text children.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let XmlNode::Text(t) = child {
                text.push_str(t);
            }
        }
        text
    }

    /// Visit this element and every descendant element in document order.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a XmlElement),
    {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    /// Serialize this element and its subtree.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128);
        self.write_xml(&mut xml);
        xml
    }

    pub(crate) fn write_xml(&self, output: &mut String) {
        if self.children.is_empty() {
            self.write_start_tag(output, true);
            return;
        }

        self.write_start_tag(output, false);
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write_xml(output),
                XmlNode::Text(text) => output.push_str(&escape_text(text)),
            }
        }
        self.write_end_tag(output);
    }

    /// Write `<name attr="...">`, or `<name attr="..."/>` when `empty`.
    pub(crate) fn write_start_tag(&self, output: &mut String, empty: bool) {
        output.push('<');
        output.push_str(&self.name);

        for (key, value) in &self.attributes {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(&escape_attr(value));
            output.push('"');
        }

        output.push_str(if empty { "/>" } else { ">" });
    }

    pub(crate) fn write_end_tag(&self, output: &mut String) {
        output.push_str("</");
        output.push_str(&self.name);
        output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let element = XmlElement::new("w:commentRangeStart");
        assert_eq!(element.local_name(), "commentRangeStart");
        assert_eq!(element.prefix(), Some("w"));

        let bare = XmlElement::new("root");
        assert_eq!(bare.local_name(), "root");
        assert_eq!(bare.prefix(), None);
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut element = XmlElement::new("w:comment")
            .with_attribute("w:id", "1")
            .with_attribute("w:author", "A");
        element.set_attribute("w:id", "7");
        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("w:id", "7"), ("w:author", "A")]);
        assert_eq!(element.remove_attribute("w:id").as_deref(), Some("7"));
        assert_eq!(element.attribute("w:id"), None);
    }

    #[test]
    fn test_order_attributes() {
        let mut element = XmlElement::new("w:comment")
            .with_attribute("w:initials", "JD")
            .with_attribute("w:custom", "x")
            .with_attribute("w:id", "1")
            .with_attribute("xmlns:w", ns::namespace_uri("w").unwrap());
        element.order_attributes(&["w:id", "w:initials"]);
        let keys: Vec<_> = element.attributes().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["xmlns:w", "w:id", "w:initials", "w:custom"]);
    }

    #[test]
    fn test_to_xml_self_closing_and_escaping() {
        let run = XmlElement::new("w:r").with_child(
            XmlElement::new("w:t")
                .with_attribute("w:note", "a \"b\"")
                .with_text("x < y & z"),
        );
        assert_eq!(
            run.to_xml(),
            r#"<w:r><w:t w:note="a &quot;b&quot;">x &lt; y &amp; z</w:t></w:r>"#
        );
        assert_eq!(
            XmlElement::new("w:commentRangeEnd")
                .with_attribute("w:id", "3")
                .to_xml(),
            r#"<w:commentRangeEnd w:id="3"/>"#
        );
    }

    #[test]
    fn test_push_text_merges() {
        let mut t = XmlElement::new("w:t");
        t.push_text("ab");
        t.push_text("");
        t.push_text("cd");
        assert_eq!(t.children().len(), 1);
        assert_eq!(t.text(), "abcd");
    }

    #[test]
    fn test_retain_and_insert_children() {
        let mut p = XmlElement::new("w:p")
            .with_child(XmlElement::new("w:pPr"))
            .with_child(XmlElement::new("w:commentRangeStart").with_attribute("w:id", "1"))
            .with_child(XmlElement::new("w:r"));
        p.retain_children(|child| {
            !matches!(child, XmlNode::Element(e) if e.local_name() == "commentRangeStart")
        });
        p.insert_child(99, XmlElement::new("w:commentRangeEnd").into());
        let names: Vec<_> = p.child_elements().map(XmlElement::name).collect();
        assert_eq!(names, vec!["w:pPr", "w:r", "w:commentRangeEnd"]);
    }

    #[test]
    fn test_walk_document_order() {
        let tree = XmlElement::new("a")
            .with_child(XmlElement::new("b").with_child(XmlElement::new("c")))
            .with_child(XmlElement::new("d"));
        let mut names = Vec::new();
        tree.walk(&mut |element| names.push(element.name()));
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }
}
