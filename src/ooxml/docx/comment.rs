/// Comment support for reading and writing comments in Word documents.
///
/// [`Comment`] is a read-through view of one `<w:comment>` entry and
/// [`Comments`] is the collection view of a [`CommentsPart`]. Neither caches
/// anything: every accessor reads the underlying element at call time.
use crate::ooxml::docx::elements::CommentElement;
use crate::ooxml::docx::parts::CommentsPart;
use crate::ooxml::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A comment in a Word document.
///
/// # Examples
///
/// ```rust
/// use docx_comments::ooxml::docx::{Comments, CommentsPart};
///
/// let mut part = CommentsPart::default();
/// let mut comments = Comments::new(&mut part);
/// comments.add("Alice", "fix this", Some("A"))?;
///
/// for comment in comments.iter() {
///     println!("Comment by {}: {}", comment.author()?, comment.text());
/// }
/// # Ok::<(), docx_comments::ooxml::OoxmlError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Comment<'a> {
    element: &'a CommentElement,
}

impl<'a> Comment<'a> {
    /// Wrap an entry.
    #[inline]
    pub fn new(element: &'a CommentElement) -> Self {
        Self { element }
    }

    /// Get the comment ID.
    #[inline]
    pub fn id(&self) -> Result<u32> {
        self.element.id()
    }

    /// Get the author name.
    #[inline]
    pub fn author(&self) -> Result<&'a str> {
        self.element.author()
    }

    /// Extract all text content from this comment.
    ///
    /// Runs and paragraphs are concatenated without separators.
    pub fn text(&self) -> String {
        self.element.text_content()
    }

    /// Get the author initials.
    #[inline]
    pub fn initials(&self) -> Option<&'a str> {
        self.element.initials()
    }

    /// Get the comment date as written in the document.
    #[inline]
    pub fn date(&self) -> Option<&'a str> {
        self.element.date()
    }

    /// Get the comment date as a UTC timestamp.
    ///
    /// `None` when the date is absent or not RFC 3339.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        let date = self.element.date()?;
        DateTime::parse_from_rfc3339(date)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    /// The underlying entry.
    #[inline]
    pub fn element(&self) -> &'a CommentElement {
        self.element
    }
}

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.element.id(), self.element.author()) {
            (Ok(id), Ok(author)) => write!(f, "<Comment id={} author=\"{}\">", id, author),
            _ => write!(f, "<Comment malformed>"),
        }
    }
}

/// The comments of a document, bound to its comments part.
///
/// Length and iteration are derived from the part on every call, so they
/// always reflect the latest additions and removals.
#[derive(Debug)]
pub struct Comments<'a> {
    part: &'a mut CommentsPart,
}

impl<'a> Comments<'a> {
    /// Bind to a comments part.
    pub fn new(part: &'a mut CommentsPart) -> Self {
        Self { part }
    }

    /// Add a comment under the next available id.
    ///
    /// When [`CommentsConfig::stamp_dates`](crate::ooxml::docx::CommentsConfig::stamp_dates)
    /// is set, `w:date` records the current UTC time.
    ///
    /// # Errors
    ///
    /// [`OoxmlError::InvalidArgument`](crate::ooxml::OoxmlError::InvalidArgument)
    /// when `author` is empty or a value holds a character XML does not allow.
    pub fn add(&mut self, author: &str, text: &str, initials: Option<&str>) -> Result<Comment<'_>> {
        let id = self.part.next_available_id();
        let mut element = CommentElement::new(id, author, text, initials)?;
        if self.part.config().stamp_dates {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            element.set_date(Some(&now))?;
        }
        self.part.insert(element).map(Comment::new)
    }

    /// Get a comment by ID.
    pub fn get_by_id(&self, id: u32) -> Option<Comment<'_>> {
        self.part.get_by_id(id).map(Comment::new)
    }

    /// Remove a comment by ID. Returns whether it was present.
    pub fn remove_by_id(&mut self, id: u32) -> bool {
        self.part.remove_by_id(id)
    }

    /// Iterate over the comments in document order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.part.iter(),
        }
    }

    /// Number of comments.
    pub fn len(&self) -> usize {
        self.part.len()
    }

    /// Whether there are no comments.
    pub fn is_empty(&self) -> bool {
        self.part.is_empty()
    }
}

impl<'b> IntoIterator for &'b Comments<'_> {
    type Item = Comment<'b>;
    type IntoIter = Iter<'b>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the comments of a [`Comments`] collection.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, CommentElement>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Comment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Comment::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl CommentsPart {
    /// Collection view over this part.
    pub fn comments(&mut self) -> Comments<'_> {
        Comments::new(self)
    }
}
