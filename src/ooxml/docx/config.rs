//! Behaviour switches for loading and editing a comments part.

/// How strictly a loaded comments part is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject parts whose entries lack `w:id`/`w:author` or repeat an id.
    #[default]
    Strict,
    /// Load such parts anyway and log each problem.
    ///
    /// Accessors still report missing attributes when they are read, and
    /// new entries are still checked for duplicate ids.
    Lenient,
}

/// Configuration of a [`CommentsPart`](crate::ooxml::docx::CommentsPart).
///
/// # Examples
///
/// ```
/// use docx_comments::ooxml::docx::{CommentsConfig, Validation};
///
/// let config = CommentsConfig::default()
///     .with_validation(Validation::Lenient)
///     .with_stamp_dates(false);
/// assert_eq!(config.validation, Validation::Lenient);
/// assert!(!config.stamp_dates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentsConfig {
    /// Checks applied when a part is loaded
    pub validation: Validation,
    /// Whether [`Comments::add`](crate::ooxml::docx::Comments::add) records
    /// the current UTC time in `w:date`
    pub stamp_dates: bool,
}

impl CommentsConfig {
    /// Set the validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Enable or disable date stamping of new comments.
    pub fn with_stamp_dates(mut self, stamp_dates: bool) -> Self {
        self.stamp_dates = stamp_dates;
        self
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            validation: Validation::Strict,
            stamp_dates: true,
        }
    }
}
