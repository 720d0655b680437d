/// The comments part (`/word/comments.xml`) of a Word document.
///
/// `CommentsPart` owns the `<w:comments>` root and is the only place where
/// comment ids are checked and allocated. It does not touch the document
/// body: removing a comment leaves its markers where they are, and the
/// marker checks here only read a body tree handed in by the caller.
use crate::ooxml::docx::anchor::marker_ids;
use crate::ooxml::docx::config::{CommentsConfig, Validation};
use crate::ooxml::docx::elements::{CommentElement, CommentsElement};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type, partname};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::{Part, xml_part_blob};
use crate::ooxml::oxml::XmlElement;
use log::{debug, warn};
use std::borrow::Cow;
use std::collections::HashSet;

/// The comments part of a WordprocessingML package.
///
/// # Examples
///
/// ```
/// use docx_comments::ooxml::docx::CommentsPart;
///
/// let mut part = CommentsPart::default();
/// let id = part.next_available_id();
/// part.add_comment(id, "Alice", "fix this", None)?;
/// assert_eq!(part.get_by_id(1).unwrap().text_content(), "fix this");
/// assert!(part.remove_by_id(1));
/// assert!(part.is_empty());
/// # Ok::<(), docx_comments::ooxml::OoxmlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CommentsPart {
    /// The partname (URI) of this part
    partname: PackURI,
    /// The root `<w:comments>` element
    element: CommentsElement,
    /// Loading and editing behaviour
    config: CommentsConfig,
    /// Highest id this part has held since it was created or loaded
    high_water: u32,
}

impl CommentsPart {
    /// Create a part at `partname` around an existing container.
    ///
    /// # Errors
    ///
    /// The container is checked as [`Validation::Strict`] loading would:
    /// [`OoxmlError::MalformedElement`] for an entry without `w:id`/`w:author`,
    /// [`OoxmlError::DuplicateId`] for a repeated id.
    pub fn new(partname: PackURI, element: CommentsElement) -> Result<Self> {
        check_entries(&element, Validation::Strict)?;
        Ok(Self::from_element(partname, element, CommentsConfig::default()))
    }

    fn from_element(partname: PackURI, element: CommentsElement, config: CommentsConfig) -> Self {
        let high_water = max_id(&element);
        Self {
            partname,
            element,
            config,
            high_water,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: CommentsConfig) -> Self {
        self.config = config;
        self
    }

    /// Load a comments part from its serialized form.
    ///
    /// # Errors
    ///
    /// - [`OoxmlError::Opc`] if `content_type` is not the comments content
    ///   type or the blob is not UTF-8.
    /// - [`OoxmlError::Xml`] if the blob is not a `<w:comments>` document.
    /// - Under [`Validation::Strict`], [`OoxmlError::MalformedElement`] for an
    ///   entry without `w:id`/`w:author` and [`OoxmlError::DuplicateId`] for
    ///   a repeated id.
    pub fn load(
        partname: PackURI,
        content_type: &str,
        blob: &[u8],
        config: CommentsConfig,
    ) -> Result<Self> {
        if content_type != content_type::WML_COMMENTS {
            return Err(OpcError::InvalidContentType {
                partname: partname.to_string(),
                expected: content_type::WML_COMMENTS,
                got: content_type.to_string(),
            }
            .into());
        }
        std::str::from_utf8(blob).map_err(OpcError::from)?;

        let element = CommentsElement::from_xml(blob)?;
        check_entries(&element, config.validation)?;
        debug!("loaded {} comments from {}", element.len(), partname);

        Ok(Self::from_element(partname, element, config))
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &CommentsConfig {
        &self.config
    }

    /// The `<w:comments>` root element.
    #[inline]
    pub fn comments_element(&self) -> &CommentsElement {
        &self.element
    }

    /// Build a comment and append it.
    ///
    /// The caller chooses `id`; use [`next_available_id`](Self::next_available_id)
    /// to get a fresh one.
    ///
    /// # Errors
    ///
    /// [`OoxmlError::DuplicateId`] if `id` is taken, [`OoxmlError::InvalidArgument`]
    /// if `author` is empty. The part is unchanged on error.
    pub fn add_comment(
        &mut self,
        id: u32,
        author: &str,
        text: &str,
        initials: Option<&str>,
    ) -> Result<&CommentElement> {
        if self.element.position(id).is_some() {
            return Err(OoxmlError::DuplicateId(id));
        }
        let comment = CommentElement::new(id, author, text, initials)?;
        self.insert(comment)
    }

    /// Append a prebuilt entry after checking its id and author.
    ///
    /// # Errors
    ///
    /// [`OoxmlError::MalformedElement`] if the entry lacks `w:id` or
    /// `w:author`, [`OoxmlError::DuplicateId`] if its id is taken. The part
    /// is unchanged on error.
    pub fn insert(&mut self, comment: CommentElement) -> Result<&CommentElement> {
        let id = comment.id()?;
        comment.author()?;
        if self.element.position(id).is_some() {
            return Err(OoxmlError::DuplicateId(id));
        }

        self.element.push(comment);
        self.high_water = self.high_water.max(id);
        debug!("added comment {} to {}", id, self.partname);

        let last = self.element.len() - 1;
        Ok(&self.element.comments()[last])
    }

    /// Find the entry with `w:id == id`.
    pub fn get_by_id(&self, id: u32) -> Option<&CommentElement> {
        self.element.position(id).map(|index| &self.element.comments()[index])
    }

    /// Mutable access to the entry with `w:id == id`.
    pub fn get_by_id_mut(&mut self, id: u32) -> Option<&mut CommentElement> {
        let index = self.element.position(id)?;
        self.element.iter_mut().nth(index)
    }

    /// Remove the entry with `w:id == id`, returning whether one was removed.
    ///
    /// Markers for the comment in the document body are not touched.
    pub fn remove_by_id(&mut self, id: u32) -> bool {
        match self.element.position(id) {
            Some(index) => {
                self.element.remove(index);
                debug!("removed comment {} from {}", id, self.partname);
                true
            },
            None => false,
        }
    }

    /// The id to use for the next comment: one past the highest id this
    /// part has ever held, or 1 for a fresh part.
    ///
    /// Ids freed by [`remove_by_id`](Self::remove_by_id) are not handed out
    /// again. Saturates at `u32::MAX`, where inserting reports
    /// [`OoxmlError::DuplicateId`].
    pub fn next_available_id(&self) -> u32 {
        self.high_water.max(max_id(&self.element)).saturating_add(1)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.element.len()
    }

    /// Whether the part holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.element.is_empty()
    }

    /// Iterate over the entries in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommentElement> {
        self.element.iter()
    }

    /// Marker ids in `body` with no matching entry in this part.
    pub fn dangling_marker_ids(&self, body: &XmlElement) -> Result<Vec<u32>> {
        let known = self.known_ids();
        Ok(marker_ids(body)?
            .all_ids()
            .into_iter()
            .filter(|id| !known.contains(id))
            .collect())
    }

    /// Entries with no `w:commentReference` in `body`.
    pub fn orphan_ids(&self, body: &XmlElement) -> Result<Vec<u32>> {
        let references = marker_ids(body)?.references;
        Ok(self
            .element
            .iter()
            .filter_map(|comment| comment.id().ok())
            .filter(|id| !references.contains(id))
            .collect())
    }

    /// Check that every marker in `body` refers to an entry in this part.
    ///
    /// # Errors
    ///
    /// [`OoxmlError::DanglingMarker`] with the lowest unmatched id.
    pub fn check_markers(&self, body: &XmlElement) -> Result<()> {
        match self.dangling_marker_ids(body)?.first() {
            Some(&id) => Err(OoxmlError::DanglingMarker(id)),
            None => Ok(()),
        }
    }

    fn known_ids(&self) -> HashSet<u32> {
        self.element
            .iter()
            .filter_map(|comment| comment.id().ok())
            .collect()
    }
}

impl Default for CommentsPart {
    /// An empty part at `/word/comments.xml`.
    fn default() -> Self {
        let partname = PackURI::new(partname::WML_COMMENTS)
            .unwrap_or_else(|_| unreachable!("well-known partname is absolute"));
        Self::from_element(partname, CommentsElement::new(), CommentsConfig::default())
    }
}

impl Part for CommentsPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        content_type::WML_COMMENTS
    }

    fn blob(&self) -> Cow<'_, [u8]> {
        Cow::Owned(xml_part_blob(&self.element.to_xml()))
    }
}

fn max_id(element: &CommentsElement) -> u32 {
    element
        .iter()
        .filter_map(|comment| comment.id().ok())
        .max()
        .unwrap_or(0)
}

/// Verify required attributes and id uniqueness of loaded entries.
fn check_entries(element: &CommentsElement, validation: Validation) -> Result<()> {
    let mut seen = HashSet::with_capacity(element.len());

    for (index, comment) in element.iter().enumerate() {
        let problem = match (comment.id(), comment.author()) {
            (Err(e), _) | (_, Err(e)) => Some(e),
            (Ok(id), Ok(_)) if !seen.insert(id) => Some(OoxmlError::DuplicateId(id)),
            _ => None,
        };

        if let Some(problem) = problem {
            match validation {
                Validation::Strict => return Err(problem),
                Validation::Lenient => warn!("comment entry #{}: {}", index, problem),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::oxml::parse_xml;

    fn part_with_ids(ids: &[u32]) -> CommentsPart {
        let mut part = CommentsPart::default();
        for &id in ids {
            part.add_comment(id, "Author", "text", None).unwrap();
        }
        part
    }

    fn ids(part: &CommentsPart) -> Vec<u32> {
        part.iter().map(|comment| comment.id().unwrap()).collect()
    }

    #[test]
    fn test_default_part() {
        let part = CommentsPart::default();
        assert_eq!(part.partname().as_str(), "/word/comments.xml");
        assert_eq!(part.content_type(), content_type::WML_COMMENTS);
        assert!(part.is_empty());
        assert_eq!(part.next_available_id(), 1);
    }

    #[test]
    fn test_next_available_id_is_one_past_max() {
        let part = part_with_ids(&[2, 5, 3]);
        assert_eq!(part.next_available_id(), 6);
    }

    #[test]
    fn test_next_available_id_does_not_reuse_removed_ids() {
        let mut part = part_with_ids(&[1, 2, 3]);
        assert!(part.remove_by_id(3));
        assert_eq!(part.next_available_id(), 4);
    }

    #[test]
    fn test_add_duplicate_id_is_rejected_without_mutation() {
        let mut part = part_with_ids(&[1]);
        assert!(matches!(
            part.add_comment(1, "Other", "dup", None),
            Err(OoxmlError::DuplicateId(1))
        ));
        assert!(matches!(
            part.add_comment(2, "", "no author", None),
            Err(OoxmlError::InvalidArgument(_))
        ));
        assert_eq!(ids(&part), vec![1]);
        assert_eq!(part.next_available_id(), 2);
    }

    #[test]
    fn test_insert_checks_required_attributes() {
        let mut part = CommentsPart::default();
        let foreign = CommentElement::from_xml(br#"<w:comment w:id="3"/>"#).unwrap();
        assert!(matches!(
            part.insert(foreign),
            Err(OoxmlError::MalformedElement { attribute: "w:author", .. })
        ));
        assert!(part.is_empty());
    }

    #[test]
    fn test_new_rejects_duplicate_container() {
        let duplicated = CommentsElement::from_xml(
            br#"<w:comments><w:comment w:id="1" w:author="A"/><w:comment w:id="1" w:author="B"/></w:comments>"#,
        )
        .unwrap();
        assert!(matches!(
            CommentsPart::new(PackURI::new("/word/comments.xml").unwrap(), duplicated),
            Err(OoxmlError::DuplicateId(1))
        ));

        let mut container = CommentsElement::new();
        container.push(CommentElement::new(2, "A", "x", None).unwrap());
        container.push(CommentElement::new(7, "B", "y", None).unwrap());
        let part = CommentsPart::new(PackURI::new("/word/comments.xml").unwrap(), container).unwrap();
        assert_eq!(ids(&part), vec![2, 7]);
        assert_eq!(part.next_available_id(), 8);
    }

    #[test]
    fn test_add_with_non_xml_characters_leaves_part_unchanged() {
        let mut part = part_with_ids(&[1]);
        let before = part.blob().into_owned();

        assert!(matches!(
            part.add_comment(2, "A\u{1}", "bad\u{0}text\u{B}", None),
            Err(OoxmlError::InvalidArgument(_))
        ));
        assert!(matches!(
            part.add_comment(2, "A", "text", Some("\u{FFFE}")),
            Err(OoxmlError::InvalidArgument(_))
        ));
        assert!(part.get_by_id_mut(1).unwrap().set_text("x\u{0}").is_err());

        assert_eq!(part.blob().into_owned(), before);
        assert!(!before.iter().any(|&b| b < 0x09));
        assert_eq!(part.next_available_id(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut part = part_with_ids(&[1, 2, 3]);
        assert!(part.remove_by_id(2));
        assert_eq!(ids(&part), vec![1, 3]);
        assert!(!part.remove_by_id(2));
        assert_eq!(ids(&part), vec![1, 3]);
    }

    #[test]
    fn test_get_by_id_mut() {
        let mut part = part_with_ids(&[1, 2]);
        part.get_by_id_mut(2).unwrap().set_text("edited").unwrap();
        assert_eq!(part.get_by_id(2).unwrap().text_content(), "edited");
        assert!(part.get_by_id_mut(9).is_none());
    }

    #[test]
    fn test_blob_round_trip() {
        let mut part = CommentsPart::default();
        part.add_comment(1, "张三", "这段需要修改，表达不够清晰", Some("ZS")).unwrap();
        part.add_comment(2, "Bob & Co", "<b>", None).unwrap();

        let blob = part.blob();
        let text = std::str::from_utf8(&blob).unwrap();
        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(text.contains(r#"<w:comment w:id="2" w:author="Bob &amp; Co">"#));

        let loaded = CommentsPart::load(
            part.partname().clone(),
            content_type::WML_COMMENTS,
            &blob,
            CommentsConfig::default(),
        )
        .unwrap();
        assert_eq!(loaded.comments_element(), part.comments_element());
        assert_eq!(loaded.next_available_id(), 3);
    }

    #[test]
    fn test_load_rejects_wrong_content_type() {
        let err = CommentsPart::load(
            PackURI::new("/word/comments.xml").unwrap(),
            content_type::WML_DOCUMENT_MAIN,
            b"<w:comments/>",
            CommentsConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::Opc(OpcError::InvalidContentType { .. })
        ));
    }

    const BROKEN: &[u8] = br#"<w:comments xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:comment w:id="1" w:author="A"><w:p/></w:comment>
  <w:comment w:id="1" w:author="B"><w:p/></w:comment>
  <w:comment w:id="4"><w:p/></w:comment>
</w:comments>"#;

    #[test]
    fn test_strict_load_rejects_broken_entries() {
        let result = CommentsPart::load(
            PackURI::new("/word/comments.xml").unwrap(),
            content_type::WML_COMMENTS,
            BROKEN,
            CommentsConfig::default(),
        );
        assert!(matches!(result, Err(OoxmlError::DuplicateId(1))));

        let missing_author = br#"<w:comments><w:comment w:id="4"/></w:comments>"#;
        let result = CommentsPart::load(
            PackURI::new("/word/comments.xml").unwrap(),
            content_type::WML_COMMENTS,
            missing_author,
            CommentsConfig::default(),
        );
        assert!(matches!(result, Err(OoxmlError::MalformedElement { .. })));
    }

    #[test]
    fn test_lenient_load_accepts_broken_entries() {
        let mut part = CommentsPart::load(
            PackURI::new("/word/comments.xml").unwrap(),
            content_type::WML_COMMENTS,
            BROKEN,
            CommentsConfig::default().with_validation(Validation::Lenient),
        )
        .unwrap();

        assert_eq!(part.len(), 3);
        assert_eq!(part.get_by_id(1).unwrap().author().unwrap(), "A");
        assert!(part.get_by_id(4).unwrap().author().is_err());
        assert_eq!(part.next_available_id(), 5);
        assert!(matches!(
            part.add_comment(4, "C", "dup", None),
            Err(OoxmlError::DuplicateId(4))
        ));
    }

    #[test]
    fn test_marker_cross_checks() {
        let part = part_with_ids(&[1, 2]);
        let body = parse_xml(
            br#"<w:body><w:p>
  <w:commentRangeStart w:id="1"/><w:r><w:t>x</w:t></w:r><w:commentRangeEnd w:id="1"/>
  <w:r><w:commentReference w:id="1"/></w:r>
  <w:commentRangeStart w:id="7"/>
</w:p></w:body>"#,
        )
        .unwrap();

        assert_eq!(part.dangling_marker_ids(&body).unwrap(), vec![7]);
        assert_eq!(part.orphan_ids(&body).unwrap(), vec![2]);
        assert!(matches!(
            part.check_markers(&body),
            Err(OoxmlError::DanglingMarker(7))
        ));

        let clean = parse_xml(br#"<w:body><w:p><w:commentRangeStart w:id="2"/></w:p></w:body>"#)
            .unwrap();
        assert!(part.check_markers(&clean).is_ok());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add,
            Remove(u32),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![3 => Just(Op::Add), 1 => (1u32..20).prop_map(Op::Remove)]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_allocated_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..40)) {
                let mut part = CommentsPart::default();
                let mut issued = Vec::new();

                for op in ops {
                    match op {
                        Op::Add => {
                            let id = part.next_available_id();
                            prop_assert!(!issued.contains(&id));
                            part.add_comment(id, "Author", "text", None).unwrap();
                            issued.push(id);
                        },
                        Op::Remove(id) => {
                            part.remove_by_id(id);
                        },
                    }
                }

                let current = ids(&part);
                let unique: HashSet<_> = current.iter().copied().collect();
                prop_assert_eq!(unique.len(), current.len());
            }
        }
    }
}
