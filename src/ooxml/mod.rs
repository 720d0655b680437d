//! Office Open XML (OOXML) comment support.
//!
//! The module is organized into several layers:
//!
//! 1. **OPC Layer** (`opc`): part names, content types and the [`opc::Part`] trait
//! 2. **XML Layer** (`oxml`): an owned element tree with parsing and serialization
//! 3. **Format-Specific Modules**:
//!    - `docx`: WordprocessingML comments and comment markers
//!
//! # Example: Reading a comments part
//!
//! ```rust
//! use docx_comments::ooxml::PackURI;
//! use docx_comments::ooxml::docx::{CommentsConfig, CommentsPart};
//! use docx_comments::ooxml::opc::constants::content_type;
//!
//! let xml = br#"<w:comments xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!   <w:comment w:id="0" w:author="Alice"><w:p><w:r><w:t>fix this</w:t></w:r></w:p></w:comment>
//! </w:comments>"#;
//!
//! let mut part = CommentsPart::load(
//!     PackURI::new("/word/comments.xml")?,
//!     content_type::WML_COMMENTS,
//!     xml,
//!     CommentsConfig::default(),
//! )?;
//! let comments = part.comments();
//! assert_eq!(comments.len(), 1);
//! assert_eq!(comments.get_by_id(0).unwrap().text(), "fix this");
//! # Ok::<(), docx_comments::ooxml::OoxmlError>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;
pub mod oxml;

pub use error::{OoxmlError, Result};
pub use opc::PackURI;
