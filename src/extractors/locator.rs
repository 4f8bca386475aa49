// src/extractors/locator.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// --- Regex Patterns (Lazy Static) ---
// Markers that open a new structural unit of an Act. A span located by
// heading never crosses one of these.
static STRUCTURAL_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"\n\s*(?:Section|Schedule|Part|Chapter|Short title|Interpretation|Explanatory note|Annex)\b",
    )
    .case_insensitive(true)
    .build()
    .expect("Failed to compile STRUCTURAL_BOUNDARY_RE")
});

/// Largest char-boundary index not exceeding `idx`.
fn floor_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut i = idx;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Locates a section by recognized heading.
///
/// Heading patterns are tried in the caller's order and the first one that
/// matches anywhere in the text wins (first-match-wins across patterns, not
/// leftmost-in-text). The span runs from the heading to the next structural
/// boundary marker, or is truncated at `max_window` characters from the
/// heading start when no boundary follows. Returns "" when no pattern
/// matches.
pub fn locate_by_heading(text: &str, heading_patterns: &[&str], max_window: usize) -> String {
    for pattern in heading_patterns {
        let re = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Skipping unparseable heading pattern '{}': {}", pattern, e);
                continue;
            }
        };
        if let Some(m) = re.find(text) {
            let start = m.start();
            let search_after = m.end();
            let end = match STRUCTURAL_BOUNDARY_RE.find(&text[search_after..]) {
                Some(boundary) => search_after + boundary.start(),
                None => floor_char_boundary(text, start + max_window),
            };
            tracing::trace!("Heading pattern '{}' matched at {}..{}", pattern, start, end);
            return text[start..end].trim().to_string();
        }
    }
    String::new()
}

/// Returns a fixed character window around the first case-insensitive
/// occurrence of `keyword`, clamped to the text bounds. This is a context
/// window rather than a semantic boundary; callers use it only as a
/// last-resort fallback. Returns "" when the keyword is absent.
pub fn snippet_around(text: &str, keyword: &str, before: usize, after: usize) -> String {
    let re = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Skipping unbuildable keyword '{}': {}", keyword, e);
            return String::new();
        }
    };
    match re.find(text) {
        Some(m) => {
            let start = floor_char_boundary(text, m.start().saturating_sub(before));
            let end = floor_char_boundary(text, (m.end() + after).min(text.len()));
            text[start..end].trim().to_string()
        }
        None => String::new(),
    }
}
