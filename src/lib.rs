//! docx-comments - typed access to the comments of WordprocessingML documents
//!
//! This library models the `word/comments.xml` part of a `.docx` package and
//! the markers that tie each comment to a span of document content.
//!
//! # Features
//!
//! - **Schema layer**: typed `w:comments`, `w:comment`, `w:commentRangeStart`,
//!   `w:commentRangeEnd` and `w:commentReference` elements
//! - **Comments part**: loading, serialization and id allocation
//! - **Collection API**: add, look up, remove and iterate comments
//! - **Anchoring**: attach a comment to a paragraph and cross-check markers
//!
//! # Example
//!
//! ```
//! use docx_comments::ooxml::docx::CommentsPart;
//! use docx_comments::ooxml::opc::Part;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut part = CommentsPart::default();
//! let mut comments = part.comments();
//!
//! comments.add("张三", "这段需要修改，表达不够清晰", Some("ZS"))?;
//! comments.add("李四", "建议添加更多细节", Some("LS"))?;
//! assert_eq!(comments.len(), 2);
//!
//! for comment in &comments {
//!     println!("{}: {}", comment.author()?, comment.text());
//! }
//!
//! comments.remove_by_id(1);
//! let blob = part.blob();
//! assert!(blob.starts_with(b"<?xml"));
//! # Ok(())
//! # }
//! ```

/// Shared helpers (XML escaping)
pub mod common;

/// OOXML (Office Open XML) comment support
///
/// This module holds the packaging primitives, the XML tree, and the
/// WordprocessingML comment model.
pub mod ooxml;
