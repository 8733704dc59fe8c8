use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::BibleApiError;

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `value` so it occupies exactly one URL path segment.
///
/// `.` and `..` are rejected: URL parsing treats them (and their `%2E`
/// forms) as dot segments and removes them from the path.
pub(crate) fn encode_segment(value: &str) -> Result<String, BibleApiError> {
    if matches!(value, "." | "..") {
        return Err(BibleApiError::InvalidPathSegment {
            value: value.to_owned(),
        });
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(value: &str) -> String {
        encode_segment(value).expect("value should be encodable")
    }

    #[test]
    fn unreserved_characters_are_kept() {
        assert_eq!(enc("genesis"), "genesis");
        assert_eq!(enc("16-17"), "16-17");
        assert_eq!(enc("a.b_c~d"), "a.b_c~d");
    }

    #[test]
    fn spaces_and_separators_are_encoded() {
        assert_eq!(enc("Song of Solomon"), "Song%20of%20Solomon");
        assert_eq!(enc("1/2"), "1%2F2");
        assert_eq!(enc("2?x#y"), "2%3Fx%23y");
        assert_eq!(enc("100%"), "100%25");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(enc("Génesis"), "G%C3%A9nesis");
    }

    #[test]
    fn dot_segments_are_rejected() {
        for value in [".", ".."] {
            let err = encode_segment(value).expect_err("dot segment should be rejected");
            assert!(
                matches!(err, BibleApiError::InvalidPathSegment { value: ref v } if v == value),
                "{value:?} should be rejected, got: {err:?}"
            );
        }
    }

    #[test]
    fn dots_inside_a_value_are_kept() {
        assert_eq!(enc("..."), "...");
        assert_eq!(enc("1.5"), "1.5");
    }
}
