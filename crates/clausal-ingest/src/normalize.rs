//! Text normalization applied before chunking.
//!
//! Extracted text arrives with page artifacts and OCR quirks; chunk
//! offsets and the coverage invariant are defined over the normalized
//! form produced here.

use std::sync::LazyLock;

use regex::Regex;

/// "Page 12", "Page 12 of 30" lines left behind by extractors.
static PAGE_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*page\s+\d+[^\n]*$").unwrap());

/// Lines holding nothing but a page number.
static BARE_PAGE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\s*$").unwrap());

/// OCR often glues a word's end to the next word's capital.
static JOINED_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize extracted text: strip page artifacts, split glued word
/// pairs, collapse whitespace runs to single spaces, trim.
pub fn normalize(text: &str) -> String {
    let text = PAGE_HEADER_RE.replace_all(text, "");
    let text = BARE_PAGE_NUMBER_RE.replace_all(&text, "");
    let text = JOINED_WORDS_RE.replace_all(&text, "$1 $2");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn strips_page_headers_and_numbers() {
        let raw = "coverage begins here\nPage 3 of 12\n7\ncoverage continues";
        assert_eq!(normalize(raw), "coverage begins here coverage continues");
    }

    #[test]
    fn splits_ocr_joined_words() {
        assert_eq!(normalize("waiting periodApplies"), "waiting period Applies");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n  "), "");
    }

    #[test]
    fn idempotent_on_already_clean_text() {
        let clean = "the policy covers knee surgery after 90 days";
        assert_eq!(normalize(clean), clean);
    }
}
