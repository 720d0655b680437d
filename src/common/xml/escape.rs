use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automata are built only once, thread-safe
static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "\t", "\n", "\r"])
        .expect("Failed to build XML attribute escaper")
});

static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\r"])
        .expect("Failed to build XML text escaper")
});

/// Escape a value for use inside a double-quoted XML attribute.
///
/// Whitespace control characters are written as character references so
/// attribute-value normalization on the reading side does not fold them
/// into spaces.
///
/// # Examples
///
/// ```
/// use docx_comments::common::xml::escape_attr;
/// assert_eq!(escape_attr("a & b"), "a &amp; b");
/// assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&#9;", "&#10;", "&#13;"])
}

/// Escape character data for use between tags.
///
/// Quotes are left alone; they are only significant inside attributes.
///
/// # Examples
///
/// ```
/// use docx_comments::common::xml::escape_text;
/// assert_eq!(escape_text("<tag>\"hello\"</tag>"), "&lt;tag&gt;\"hello\"&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&#13;"])
}

/// Whether `c` may appear in an XML 1.0 document.
///
/// Control characters other than tab, line feed and carriage return are
/// excluded, as are U+FFFE and U+FFFF. Surrogates cannot occur in a `char`.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::escape::unescape;

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape_text("it's \"fine\" & <ok>"), "it's \"fine\" &amp; &lt;ok&gt;");
    }

    #[test]
    fn test_escape_attr_round_trip() {
        let raw = "Tom & \"Jerry\" <cat>\tand\nfriends";
        assert_eq!(unescape(&escape_attr(raw)).unwrap(), raw);
    }

    #[test]
    fn test_is_xml_char() {
        for c in ['\t', '\n', '\r', ' ', 'a', '中', '\u{FFFD}', '\u{1F600}'] {
            assert!(is_xml_char(c), "{:?}", c);
        }
        for c in ['\u{0}', '\u{1}', '\u{B}', '\u{C}', '\u{1F}', '\u{FFFE}', '\u{FFFF}'] {
            assert!(!is_xml_char(c), "{:?}", c);
        }
    }
}
