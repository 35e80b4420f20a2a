use regex::{Regex, RegexBuilder};

use crate::error::InvalidPatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Literal,
    Regex,
}

/// One search request: what to look for and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub pattern: String,
    pub mode: SearchMode,
    pub case_sensitive: bool,
}

impl SearchQuery {
    pub fn literal(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            mode: SearchMode::Literal,
            case_sensitive: true,
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            mode: SearchMode::Regex,
            case_sensitive: true,
        }
    }
}

/// A located occurrence of the query in the document. `offset` is the
/// byte offset of the match start within the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub offset: usize,
    pub text: String,
}

impl Match {
    pub fn new(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            text: text.into(),
        }
    }

    /// Byte offset one past the end of the matched text.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

fn compile(query: &SearchQuery) -> Result<Regex, InvalidPatternError> {
    let pattern = match query.mode {
        SearchMode::Literal => regex::escape(&query.pattern),
        SearchMode::Regex => query.pattern.clone(),
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(!query.case_sensitive)
        .build()
        .map_err(|e| InvalidPatternError::new(&query.pattern, &e))
}

/// Finds every non-overlapping occurrence of `query` in `document`, in
/// document order.
///
/// Scanning uses a single cursor that always advances: past the end of
/// each reported match, or past one character when the pattern produced
/// a zero-width match. Zero-width matches themselves are not reported;
/// an editor cannot select an empty range. An empty pattern matches
/// nothing.
pub fn find(document: &str, query: &SearchQuery) -> Result<Vec<Match>, InvalidPatternError> {
    if query.pattern.is_empty() {
        return Ok(Vec::new());
    }

    let regex = compile(query)?;
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor <= document.len() {
        let Some(found) = regex.find_at(document, cursor) else {
            break;
        };

        if found.is_empty() {
            let Some(c) = document[found.end()..].chars().next() else {
                break;
            };
            cursor = found.end() + c.len_utf8();
            continue;
        }

        matches.push(Match::new(found.start(), found.as_str()));
        cursor = found.end();
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_offsets() {
        let matches = find("the cat sat on the mat", &SearchQuery::literal("at")).unwrap();
        assert_eq!(
            matches,
            vec![
                Match::new(5, "at"),
                Match::new(9, "at"),
                Match::new(20, "at"),
            ]
        );
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let matches = find("aaaa", &SearchQuery::literal("aa")).unwrap();
        assert_eq!(matches, vec![Match::new(0, "aa"), Match::new(2, "aa")]);
    }

    #[test]
    fn test_matched_text_is_document_substring() {
        let document = "the cat sat on the mat";
        let matches = find(document, &SearchQuery::regex(r"\w+at")).unwrap();
        assert!(!matches.is_empty());
        for m in &matches {
            assert_eq!(&document[m.offset..m.end()], m.text);
        }
    }

    #[test]
    fn test_regex_mode() {
        let matches = find("abc123def456", &SearchQuery::regex(r"\d+")).unwrap();
        assert_eq!(matches, vec![Match::new(3, "123"), Match::new(9, "456")]);
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        assert!(find("anything", &SearchQuery::literal("")).unwrap().is_empty());
        assert!(find("anything", &SearchQuery::regex("")).unwrap().is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(find("", &SearchQuery::literal("x")).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_regex() {
        let err = find("doc", &SearchQuery::regex("(unclosed")).unwrap_err();
        assert_eq!(err.pattern(), "(unclosed");
    }

    #[test]
    fn test_literal_does_not_interpret_metacharacters() {
        let query = SearchQuery::literal("foo.*bar");
        assert!(find("fooXXXbar", &query).unwrap().is_empty());
        assert_eq!(
            find("foo.*bar", &query).unwrap(),
            vec![Match::new(0, "foo.*bar")]
        );
    }

    #[test]
    fn test_zero_width_matches_terminate() {
        let matches = find("aaa", &SearchQuery::regex("a*")).unwrap();
        assert_eq!(matches, vec![Match::new(0, "aaa")]);
    }

    #[test]
    fn test_zero_width_between_real_matches() {
        let matches = find("bab", &SearchQuery::regex("a*")).unwrap();
        assert_eq!(matches, vec![Match::new(1, "a")]);
    }

    #[test]
    fn test_zero_width_over_multibyte_text() {
        // The zero-width advance must step a full scalar, not one byte.
        let matches = find("é1é2", &SearchQuery::regex(r"\d*")).unwrap();
        assert_eq!(matches, vec![Match::new(2, "1"), Match::new(5, "2")]);
    }

    #[test]
    fn test_case_sensitivity() {
        let mut query = SearchQuery::literal("HELLO");
        assert!(find("Hello World", &query).unwrap().is_empty());

        query.case_sensitive = false;
        assert_eq!(
            find("Hello World", &query).unwrap(),
            vec![Match::new(0, "Hello")]
        );
    }

    #[test]
    fn test_unicode_offsets_are_byte_offsets() {
        let matches = find("héllo héllo", &SearchQuery::literal("héllo")).unwrap();
        assert_eq!(matches, vec![Match::new(0, "héllo"), Match::new(7, "héllo")]);
    }

    #[test]
    fn test_find_is_deterministic() {
        let query = SearchQuery::regex(r"[a-z]+");
        let first = find("one two three", &query).unwrap();
        let second = find("one two three", &query).unwrap();
        assert_eq!(first, second);
    }
}
