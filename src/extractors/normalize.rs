// src/extractors/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
static PAGE_NUMBER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+[ \t]*$").expect("Failed to compile PAGE_NUMBER_LINE_RE")
});

static HSPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]{2,}").expect("Failed to compile HSPACE_RUN_RE")
});

static BLANK_LINE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s+\n").expect("Failed to compile BLANK_LINE_RUN_RE")
});

/// Canonical, cleaned text of one document.
///
/// Invariants: no carriage returns, no runs of two or more blank lines, no
/// runs of two or more horizontal-whitespace characters, no standalone
/// numeric-only lines. Built once per document and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Cleans raw extracted text into its canonical form: page breaks and CRLF
/// become plain newlines, bare page-number lines are dropped, whitespace and
/// blank-line runs are collapsed, and the result is trimmed.
pub fn normalize(raw: &str) -> NormalizedText {
    if raw.is_empty() {
        return NormalizedText(String::new());
    }
    let text = raw.replace('\x0c', "\n").replace("\r\n", "\n").replace('\r', "\n");
    // Page-number removal leaves blank lines behind, so it runs before the
    // blank-line collapse.
    let text = PAGE_NUMBER_LINE_RE.replace_all(&text, "");
    let text = HSPACE_RUN_RE.replace_all(&text, " ");
    let text = BLANK_LINE_RUN_RE.replace_all(&text, "\n\n");
    NormalizedText(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_page_breaks_and_crlf() {
        let out = normalize("first page\x0csecond page\r\nthird line");
        assert_eq!(out.as_str(), "first page\nsecond page\nthird line");
    }

    #[test]
    fn removes_bare_page_number_lines() {
        let out = normalize("Section 1 text\n12\nmore text");
        assert!(!out.as_str().contains("12"));
        assert!(out.as_str().contains("Section 1 text"));
        assert!(out.as_str().contains("more text"));
    }

    #[test]
    fn collapses_whitespace_and_blank_runs() {
        let out = normalize("a  \t  b\n\n\n\nc");
        assert_eq!(out.as_str(), "a b\n\nc");
    }

    #[test]
    fn empty_input_yields_empty_text() {
        let out = normalize("");
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn invariants_hold_on_messy_input() {
        let out = normalize("  line one \t\t x\r\n\r\n\r\n 42 \r\npage\x0c7\x0cend  ");
        let text = out.as_str();
        assert!(!text.contains('\r'));
        assert!(!text.contains("\n\n\n"));
        assert!(!text.contains("  "));
        for line in text.lines() {
            assert!(!line.trim().chars().all(|c| c.is_ascii_digit()) || line.trim().is_empty());
        }
        assert_eq!(text, text.trim());
    }
}
