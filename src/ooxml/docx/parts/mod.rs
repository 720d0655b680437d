/// Part implementations for Word documents.
pub mod comments_part;

pub use comments_part::CommentsPart;
