/// Zero-width markers that anchor a comment to document content.
///
/// `w:commentRangeStart` and `w:commentRangeEnd` bracket the commented
/// span; `w:commentReference` sits in a run after the range and is what
/// makes the comment show up in a word processor. All three carry only the
/// id of the comment they belong to.
use crate::ooxml::docx::elements::{W_ID, W_R, parse_id, unexpected_element};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::{XmlElement, parse_xml};

pub(crate) const W_COMMENT_RANGE_START: &str = "w:commentRangeStart";
pub(crate) const W_COMMENT_RANGE_END: &str = "w:commentRangeEnd";
pub(crate) const W_COMMENT_REFERENCE: &str = "w:commentReference";

macro_rules! comment_marker {
    ($(#[$meta:meta])* $name:ident, $tag:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(XmlElement);

        impl $name {
            /// Create the marker for comment `id`.
            pub fn new(id: u32) -> Self {
                let mut buf = itoa::Buffer::new();
                Self(XmlElement::new($tag).with_attribute(W_ID, buf.format(id)))
            }

            /// Parse a serialized marker element.
            pub fn from_xml(bytes: &[u8]) -> Result<Self> {
                Self::try_from(parse_xml(bytes)?)
            }

            /// The id of the comment this marker belongs to (`w:id`, required).
            pub fn id(&self) -> Result<u32> {
                parse_id(&self.0, $tag)
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

            /// Serialize this marker.
            pub fn to_xml(&self) -> String {
                self.0.to_xml()
            }
        }

        impl TryFrom<XmlElement> for $name {
            type Error = OoxmlError;

            fn try_from(element: XmlElement) -> Result<Self> {
                if !element.is($tag) {
                    return Err(unexpected_element($tag, &element));
                }
                Ok(Self(element))
            }
        }

        impl From<$name> for XmlElement {
            fn from(marker: $name) -> Self {
                marker.0
            }
        }
    };
}

comment_marker!(
    /// `<w:commentRangeStart w:id="…"/>`, the start of a commented span.
    CommentRangeStart,
    W_COMMENT_RANGE_START
);

comment_marker!(
    /// `<w:commentRangeEnd w:id="…"/>`, the end of a commented span.
    CommentRangeEnd,
    W_COMMENT_RANGE_END
);

comment_marker!(
    /// `<w:commentReference w:id="…"/>`, the visible anchor of a comment.
    ///
    /// Must sit inside a run; see [`CommentReference::into_run`].
    CommentReference,
    W_COMMENT_REFERENCE
);

impl CommentReference {
    /// Wrap this reference in the run Word writes for it:
    /// `<w:r><w:rPr><w:rStyle w:val="CommentReference"/></w:rPr><w:commentReference …/></w:r>`.
    pub fn into_run(self) -> XmlElement {
        let rpr = XmlElement::new("w:rPr")
            .with_child(XmlElement::new("w:rStyle").with_attribute("w:val", "CommentReference"));
        XmlElement::new(W_R).with_child(rpr).with_child(self.0)
    }

    /// Shorthand for `CommentReference::new(id).into_run()`.
    pub fn new_run(id: u32) -> XmlElement {
        Self::new(id).into_run()
    }
}
