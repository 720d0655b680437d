/// Placing comment markers in document content and finding them again.
///
/// The comments part never edits the document body itself; these helpers
/// are what a caller uses to attach a comment to a paragraph and to check
/// that the markers in a body agree with the entries in the part.
use crate::ooxml::docx::elements::{
    CommentRangeEnd, CommentRangeStart, CommentReference, W_COMMENT_RANGE_END,
    W_COMMENT_RANGE_START, W_COMMENT_REFERENCE, W_P, parse_id,
};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::{XmlElement, XmlNode};
use std::collections::BTreeSet;

/// Comment ids found in a document subtree, grouped by marker kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentMarkers {
    pub range_starts: BTreeSet<u32>,
    pub range_ends: BTreeSet<u32>,
    pub references: BTreeSet<u32>,
}

impl CommentMarkers {
    /// Every id referenced by any marker kind.
    pub fn all_ids(&self) -> BTreeSet<u32> {
        self.range_starts
            .iter()
            .chain(&self.range_ends)
            .chain(&self.references)
            .copied()
            .collect()
    }
}

/// Collect the ids of all comment markers anywhere below `body`.
///
/// # Errors
///
/// [`OoxmlError::MalformedElement`] for a marker without a valid `w:id`.
pub fn marker_ids(body: &XmlElement) -> Result<CommentMarkers> {
    let mut markers = CommentMarkers::default();
    let mut failure = None;

    body.walk(&mut |element| {
        if failure.is_some() {
            return;
        }
        let (tag, set) = match element.name() {
            W_COMMENT_RANGE_START => (W_COMMENT_RANGE_START, &mut markers.range_starts),
            W_COMMENT_RANGE_END => (W_COMMENT_RANGE_END, &mut markers.range_ends),
            W_COMMENT_REFERENCE => (W_COMMENT_REFERENCE, &mut markers.references),
            _ => return,
        };
        match parse_id(element, tag) {
            Ok(id) => {
                set.insert(id);
            },
            Err(e) => failure = Some(e),
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(markers),
    }
}

/// Attach comment `id` to the whole content of a paragraph.
///
/// Inserts `w:commentRangeStart` ahead of the paragraph content (after
/// `w:pPr` when present), then appends `w:commentRangeEnd` and the run
/// holding `w:commentReference`.
///
/// # Errors
///
/// [`OoxmlError::Xml`] when `paragraph` is not a `w:p`; it is left unchanged.
///
/// # Examples
///
/// ```
/// use docx_comments::ooxml::docx::anchor_paragraph;
/// use docx_comments::ooxml::oxml::parse_xml;
///
/// let mut p = parse_xml(br#"<w:p><w:r><w:t>fix this</w:t></w:r></w:p>"#)?;
/// anchor_paragraph(&mut p, 1)?;
/// assert_eq!(
///     p.to_xml(),
///     concat!(
///         r#"<w:p><w:commentRangeStart w:id="1"/><w:r><w:t>fix this</w:t></w:r>"#,
///         r#"<w:commentRangeEnd w:id="1"/>"#,
///         r#"<w:r><w:rPr><w:rStyle w:val="CommentReference"/></w:rPr><w:commentReference w:id="1"/></w:r></w:p>"#,
///     )
/// );
/// # Ok::<(), docx_comments::ooxml::OoxmlError>(())
/// ```
pub fn anchor_paragraph(paragraph: &mut XmlElement, id: u32) -> Result<()> {
    if !paragraph.is(W_P) {
        return Err(OoxmlError::Xml(format!(
            "Comments can only be anchored to <{}>, found <{}>",
            W_P,
            paragraph.name()
        )));
    }

    let start = paragraph
        .children()
        .iter()
        .position(|child| matches!(child, XmlNode::Element(e) if e.is("w:pPr")))
        .map_or(0, |ppr| ppr + 1);

    paragraph.insert_child(start, CommentRangeStart::new(id).into_element().into());
    paragraph.append_child(CommentRangeEnd::new(id).into_element());
    paragraph.append_child(CommentReference::new_run(id));
    Ok(())
}
