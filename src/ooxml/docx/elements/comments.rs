/// Typed `<w:comments>` and `<w:comment>` elements.
///
/// Construction always produces schema-valid fragments. Accessors for
/// required attributes return `Result` and report
/// [`OoxmlError::MalformedElement`] when a parsed element lacks them;
/// optional attributes come back as `Option`.
use crate::ooxml::docx::elements::{W_ID, check_xml_value, parse_id, unexpected_element};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::{XmlElement, XmlNode, parse_xml};

pub(crate) const W_COMMENTS: &str = "w:comments";
pub(crate) const W_COMMENT: &str = "w:comment";
pub(crate) const W_AUTHOR: &str = "w:author";
pub(crate) const W_DATE: &str = "w:date";
pub(crate) const W_INITIALS: &str = "w:initials";
pub(crate) const W_P: &str = "w:p";
pub(crate) const W_R: &str = "w:r";
pub(crate) const W_T: &str = "w:t";

/// Attribute order Word writes on `<w:comment>`.
const COMMENT_ATTR_ORDER: [&str; 4] = [W_ID, W_AUTHOR, W_DATE, W_INITIALS];

/// The `<w:comments>` root of a comments part.
///
/// Holds the root's own attributes (namespace declarations included) and
/// its `<w:comment>` children in document order. Whitespace between
/// entries is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsElement {
    /// The root element, without children
    root: XmlElement,
    /// Comment entries in document order
    comments: Vec<CommentElement>,
}

impl CommentsElement {
    /// Create an empty `<w:comments>` element declaring the `w` namespace.
    pub fn new() -> Self {
        let mut root = XmlElement::new(W_COMMENTS);
        root.declare_namespace("w");
        Self {
            root,
            comments: Vec::new(),
        }
    }

    /// Parse a serialized `<w:comments>` element.
    pub fn from_xml(bytes: &[u8]) -> Result<Self> {
        Self::try_from(parse_xml(bytes)?)
    }

    /// Number of comment entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether the container holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// The entries in document order.
    #[inline]
    pub fn comments(&self) -> &[CommentElement] {
        &self.comments
    }

    /// Iterate over the entries in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommentElement> {
        self.comments.iter()
    }

    /// Mutably iterate over the entries in document order.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, CommentElement> {
        self.comments.iter_mut()
    }

    /// Append an entry without any identifier checks.
    ///
    /// Callers outside the crate go through
    /// [`CommentsPart::add_comment`](crate::ooxml::docx::CommentsPart::add_comment).
    pub(crate) fn push(&mut self, comment: CommentElement) {
        self.comments.push(comment);
    }

    /// Remove and return the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn remove(&mut self, index: usize) -> CommentElement {
        self.comments.remove(index)
    }

    /// Index of the first entry whose `w:id` equals `id`.
    ///
    /// Entries with a missing or unparsable id never match.
    pub fn position(&self, id: u32) -> Option<usize> {
        self.comments
            .iter()
            .position(|comment| comment.id().ok() == Some(id))
    }

    /// The root element's attributes, namespace declarations included.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Serialize the container and all of its entries.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.comments.len() * 256);
        if self.comments.is_empty() {
            self.root.write_start_tag(&mut xml, true);
            return xml;
        }
        self.root.write_start_tag(&mut xml, false);
        for comment in &self.comments {
            comment.as_element().write_xml(&mut xml);
        }
        self.root.write_end_tag(&mut xml);
        xml
    }
}

impl Default for CommentsElement {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<XmlElement> for CommentsElement {
    type Error = OoxmlError;

    /// Wrap a parsed `<w:comments>` element.
    ///
    /// Only `<w:comment>` children and inter-element whitespace are accepted.
    /// Names must carry the `w:` prefix.
    /// Attribute contracts of the entries are checked when they are read.
    fn try_from(mut root: XmlElement) -> Result<Self> {
        if !root.is(W_COMMENTS) {
            return Err(unexpected_element(W_COMMENTS, &root));
        }

        let children = root.take_children();
        let mut comments = Vec::with_capacity(children.len());
        for child in children {
            match child {
                XmlNode::Element(element) => comments.push(CommentElement::try_from(element)?),
                XmlNode::Text(text) if text.trim().is_empty() => {},
                XmlNode::Text(text) => {
                    return Err(OoxmlError::Xml(format!(
                        "Unexpected text in <{}>: {:?}",
                        W_COMMENTS, text
                    )));
                },
            }
        }

        Ok(Self { root, comments })
    }
}

/// A `<w:comment>` entry.
///
/// The body is ordinary block content; entries built here carry one
/// paragraph with one run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentElement(XmlElement);

impl CommentElement {
    /// Build a comment whose body is a single paragraph holding `text`.
    ///
    /// Empty `initials` are treated as absent and not written.
    ///
    /// # Errors
    ///
    /// [`OoxmlError::InvalidArgument`] when `author` is empty or any value
    /// holds a character XML does not allow.
    ///
    /// # Examples
    ///
    /// ```
    /// use docx_comments::ooxml::docx::CommentElement;
    ///
    /// let comment = CommentElement::new(1, "Jane Smith", "Review this", Some("JS"))?;
    /// assert_eq!(
    ///     comment.to_xml(),
    ///     r#"<w:comment w:id="1" w:author="Jane Smith" w:initials="JS"><w:p><w:r><w:t>Review this</w:t></w:r></w:p></w:comment>"#
    /// );
    /// # Ok::<(), docx_comments::ooxml::OoxmlError>(())
    /// ```
    pub fn new(id: u32, author: &str, text: &str, initials: Option<&str>) -> Result<Self> {
        check_author(author)?;
        check_xml_value("text", text)?;
        if let Some(initials) = initials {
            check_xml_value("initials", initials)?;
        }

        let mut buf = itoa::Buffer::new();
        let mut element = XmlElement::new(W_COMMENT)
            .with_attribute(W_ID, buf.format(id))
            .with_attribute(W_AUTHOR, author);
        if let Some(initials) = initials.filter(|initials| !initials.is_empty()) {
            element.set_attribute(W_INITIALS, initials);
        }
        element.append_child(text_paragraph(text));

        Ok(Self(element))
    }

    /// Parse a serialized `<w:comment>` element.
    pub fn from_xml(bytes: &[u8]) -> Result<Self> {
        Self::try_from(parse_xml(bytes)?)
    }

    /// The comment id (`w:id`, required).
    pub fn id(&self) -> Result<u32> {
        parse_id(&self.0, W_COMMENT)
    }

    /// The author name (`w:author`, required).
    pub fn author(&self) -> Result<&str> {
        self.0
            .attribute(W_AUTHOR)
            .ok_or(OoxmlError::MalformedElement {
                element: W_COMMENT,
                attribute: W_AUTHOR,
            })
    }

    /// The creation date (`w:date`), if recorded.
    #[inline]
    pub fn date(&self) -> Option<&str> {
        self.0.attribute(W_DATE)
    }

    /// The author initials (`w:initials`), if recorded.
    #[inline]
    pub fn initials(&self) -> Option<&str> {
        self.0.attribute(W_INITIALS)
    }

    /// Replace the author name.
    ///
    /// # Errors
    ///
    /// [`OoxmlError::InvalidArgument`] when `author` is empty or holds a
    /// character XML does not allow. The setters below fail the same way;
    /// the element is left unchanged on error.
    pub fn set_author(&mut self, author: &str) -> Result<()> {
        check_author(author)?;
        self.set_ordered(W_AUTHOR, Some(author));
        Ok(())
    }

    /// Set or clear the author initials.
    pub fn set_initials(&mut self, initials: Option<&str>) -> Result<()> {
        if let Some(initials) = initials {
            check_xml_value("initials", initials)?;
        }
        self.set_ordered(W_INITIALS, initials.filter(|initials| !initials.is_empty()));
        Ok(())
    }

    /// Set or clear the creation date.
    pub fn set_date(&mut self, date: Option<&str>) -> Result<()> {
        if let Some(date) = date {
            check_xml_value("date", date)?;
        }
        self.set_ordered(W_DATE, date);
        Ok(())
    }

    /// Replace the whole body with a single paragraph holding `text`.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        check_xml_value("text", text)?;
        self.0.clear_children();
        self.0.append_child(text_paragraph(text));
        Ok(())
    }

    /// All `<w:t>` text in the body, concatenated in document order.
    ///
    /// This is a lossy projection: run formatting and paragraph
    /// boundaries are dropped. See [`paragraphs_text`](Self::paragraphs_text).
    pub fn text_content(&self) -> String {
        collect_text(&self.0)
    }

    /// The text of each body paragraph, in document order.
    pub fn paragraphs_text(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        self.0.walk(&mut |element| {
            if element.is(W_P) {
                paragraphs.push(collect_text(element));
            }
        });
        paragraphs
    }

    /// The underlying element.
    #[inline]
    pub fn as_element(&self) -> &XmlElement {
        &self.0
    }

    /// Unwrap into the underlying element.
    #[inline]
    pub fn into_element(self) -> XmlElement {
        self.0
    }

    /// Serialize this entry on its own.
    pub fn to_xml(&self) -> String {
        self.0.to_xml()
    }

    fn set_ordered(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.0.set_attribute(name, value);
                self.0.order_attributes(&COMMENT_ATTR_ORDER);
            },
            None => {
                self.0.remove_attribute(name);
            },
        }
    }
}

impl TryFrom<XmlElement> for CommentElement {
    type Error = OoxmlError;

    fn try_from(element: XmlElement) -> Result<Self> {
        if !element.is(W_COMMENT) {
            return Err(unexpected_element(W_COMMENT, &element));
        }
        Ok(Self(element))
    }
}

fn check_author(author: &str) -> Result<()> {
    if author.is_empty() {
        return Err(OoxmlError::InvalidArgument(
            "comment author must not be empty".to_string(),
        ));
    }
    check_xml_value("author", author)
}

/// `<w:p><w:r><w:t>text</w:t></w:r></w:p>`
fn text_paragraph(text: &str) -> XmlElement {
    let mut t = XmlElement::new(W_T);
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        t.set_attribute("xml:space", "preserve");
    }
    t.push_text(text);
    XmlElement::new(W_P).with_child(XmlElement::new(W_R).with_child(t))
}

fn collect_text(element: &XmlElement) -> String {
    let mut text = String::new();
    element.walk(&mut |descendant| {
        if descendant.is(W_T) {
            text.push_str(&descendant.text());
        }
    });
    text
}
