/// Open Packaging Conventions (OPC) primitives.
///
/// Only the pieces a single XML part needs are provided here: part names,
/// content types and the `Part` contract through which the package layer
/// reads a part's content.
pub mod constants;
pub mod error;
pub mod packuri;
pub mod part;

// Re-export commonly used types
pub use packuri::PackURI;
pub use part::Part;
