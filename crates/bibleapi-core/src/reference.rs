//! Request types for verse and chapter lookups.
//!
//! Values are carried as given: book names are not checked against a canon
//! and verse specifiers that are neither `N` nor `N-M` are kept as raw text.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<book>\S.*?)\s+(?P<chapter>\d+):(?P<verses>\S+)\s*$")
        .expect("valid reference regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("invalid reference \"{0}\": expected \"<book> <chapter>:<verses>\"")]
    Malformed(String),

    #[error("chapter number out of range in \"{0}\"")]
    ChapterOutOfRange(String),
}

/// A verse (or chapter) specifier: a single number, an `N-M` range, or any
/// other text passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    Single(u32),
    /// Bounds are not ordered or checked; the service decides what they mean.
    Range {
        start: u32,
        end: u32,
    },
    Raw(String),
}

impl RangeSpec {
    /// Classifies `input` without altering it.
    ///
    /// Only canonical decimal forms are recognised as numbers, so `"02"` stays
    /// [`RangeSpec::Raw`] and renders back exactly as it was given.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if let Some(n) = parse_canonical(input) {
            return Self::Single(n);
        }
        if let Some((start, end)) = input.split_once('-') {
            if let (Some(start), Some(end)) = (parse_canonical(start), parse_canonical(end)) {
                return Self::Range { start, end };
            }
        }
        Self::Raw(input.to_string())
    }
}

fn parse_canonical(s: &str) -> Option<u32> {
    let n = s.parse::<u32>().ok()?;
    (n.to_string() == s).then_some(n)
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSpec::Single(n) => write!(f, "{n}"),
            RangeSpec::Range { start, end } => write!(f, "{start}-{end}"),
            RangeSpec::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<u32> for RangeSpec {
    fn from(n: u32) -> Self {
        Self::Single(n)
    }
}

impl From<&str> for RangeSpec {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for RangeSpec {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Lookup of one verse or a verse range within a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRequest {
    pub book: String,
    pub chapter: u32,
    pub verse: RangeSpec,
}

impl VerseRequest {
    pub fn new(book: impl Into<String>, chapter: u32, verse: impl Into<RangeSpec>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse: verse.into(),
        }
    }
}

impl FromStr for VerseRequest {
    type Err = ReferenceError;

    /// Parses `"<book> <chapter>:<verses>"`, e.g. `"Song of Solomon 2:1-3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = REFERENCE_RE
            .captures(s)
            .ok_or_else(|| ReferenceError::Malformed(s.to_string()))?;
        let chapter = caps["chapter"]
            .parse::<u32>()
            .map_err(|_| ReferenceError::ChapterOutOfRange(s.to_string()))?;
        Ok(Self::new(&caps["book"], chapter, &caps["verses"]))
    }
}

impl fmt::Display for VerseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Lookup of a whole chapter, or a `N-M` run of chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRequest {
    pub book: String,
    pub chapters: RangeSpec,
}

impl ChapterRequest {
    pub fn new(book: impl Into<String>, chapters: impl Into<RangeSpec>) -> Self {
        Self {
            book: book.into(),
            chapters: chapters.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_number_is_recognised() {
        assert_eq!(RangeSpec::parse("2"), RangeSpec::Single(2));
        assert_eq!(RangeSpec::from(2), RangeSpec::Single(2));
    }

    #[test]
    fn hyphenated_pair_is_a_range() {
        assert_eq!(
            RangeSpec::parse("16-17"),
            RangeSpec::Range { start: 16, end: 17 }
        );
    }

    #[test]
    fn descending_range_is_kept_as_is() {
        let spec = RangeSpec::parse("9-3");
        assert_eq!(spec, RangeSpec::Range { start: 9, end: 3 });
        assert_eq!(spec.to_string(), "9-3");
    }

    #[test]
    fn non_canonical_numbers_stay_raw() {
        assert_eq!(RangeSpec::parse("02"), RangeSpec::Raw("02".to_string()));
        assert_eq!(RangeSpec::parse("02").to_string(), "02");
        assert_eq!(RangeSpec::parse("+2"), RangeSpec::Raw("+2".to_string()));
    }

    #[test]
    fn other_text_passes_through() {
        for raw in ["1,3,5", "a", "", "1-2-3", "5-"] {
            let spec = RangeSpec::parse(raw);
            assert_eq!(spec, RangeSpec::Raw(raw.to_string()), "input {raw:?}");
            assert_eq!(spec.to_string(), raw);
        }
    }

    #[test]
    fn parses_simple_reference() {
        let req: VerseRequest = "genesis 1:2".parse().unwrap();
        assert_eq!(req, VerseRequest::new("genesis", 1, 2));
    }

    #[test]
    fn parses_reference_with_spaces_in_book() {
        let req: VerseRequest = "Song of Solomon 2:1-3".parse().unwrap();
        assert_eq!(req.book, "Song of Solomon");
        assert_eq!(req.chapter, 2);
        assert_eq!(req.verse, RangeSpec::Range { start: 1, end: 3 });
    }

    #[test]
    fn parses_reference_with_numbered_book() {
        let req: VerseRequest = " 1 John 4:8 ".parse().unwrap();
        assert_eq!(req.book, "1 John");
        assert_eq!(req.chapter, 4);
        assert_eq!(req.verse, RangeSpec::Single(8));
    }

    #[test]
    fn rejects_reference_without_verse() {
        let err = "genesis 1".parse::<VerseRequest>().unwrap_err();
        assert_eq!(err, ReferenceError::Malformed("genesis 1".to_string()));
    }

    #[test]
    fn rejects_chapter_overflow() {
        let err = "genesis 99999999999:1".parse::<VerseRequest>().unwrap_err();
        assert!(matches!(err, ReferenceError::ChapterOutOfRange(_)));
    }

    #[test]
    fn display_matches_reference_form() {
        let req = VerseRequest::new("john", 3, "16-17");
        assert_eq!(req.to_string(), "john 3:16-17");
    }
}
