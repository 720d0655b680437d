/// Word document (.docx) comment support.
///
/// The layers, from the bottom up:
///
/// - [`elements`]: typed wrappers for `w:comments`, `w:comment` and the
///   three comment markers
/// - [`parts`]: [`CommentsPart`], which owns the container and allocates ids
/// - [`comment`]: the [`Comments`] collection and [`Comment`] view
/// - [`anchor`]: placing markers in a paragraph and reading them back
///
/// # Example
///
/// ```rust
/// use docx_comments::ooxml::docx::{CommentsPart, anchor_paragraph};
/// use docx_comments::ooxml::oxml::parse_xml;
///
/// let mut part = CommentsPart::default();
/// let id = part.comments().add("Alice", "fix this", Some("A"))?.id()?;
///
/// let mut paragraph = parse_xml(br#"<w:p><w:r><w:t>Hello</w:t></w:r></w:p>"#)?;
/// anchor_paragraph(&mut paragraph, id)?;
/// part.check_markers(&paragraph)?;
/// # Ok::<(), docx_comments::ooxml::OoxmlError>(())
/// ```
pub mod anchor;
pub mod comment;
pub mod config;
pub mod elements;
pub mod parts;

pub use anchor::{CommentMarkers, anchor_paragraph, marker_ids};
pub use comment::{Comment, Comments};
pub use config::{CommentsConfig, Validation};
pub use elements::{
    CommentElement, CommentRangeEnd, CommentRangeStart, CommentReference, CommentsElement,
};
pub use parts::CommentsPart;
