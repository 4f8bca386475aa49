// src/extractors/fields.rs

// --- Imports ---
use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::locator::{locate_by_heading, snippet_around};
use super::normalize::NormalizedText;

// --- Constants ---
const DEFAULT_HEADING_WINDOW: usize = 1400;
const DEFINITIONS_HEADING_WINDOW: usize = 2000;
// Record-keeping language recurs throughout an Act; the scan keeps only the
// leading matches.
const RECORD_KEEPING_MATCH_CAP: usize = 12;

/// Claimant-category terms an eligibility section is expected to mention.
const ELIGIBILITY_KEYWORDS: &[&str] = &[
    "pre-2026 claimant",
    "severe conditions",
    "terminally ill",
    "limited capability for work",
    "LCWRA",
    "LCW",
];

// --- Regex Patterns for Sentence Scans (Lazy Static) ---
static QUOTED_TERM_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r#"["“]([^"”]{1,120})["”]\s+means\s+([^.;\n]+)[.;\n]?"#)
        .case_insensitive(true)
        .build()
        .expect("Failed to compile QUOTED_TERM_RE")
});

static OBLIGATION_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"([A-Z][^.\n]{0,300}\b(?:Secretary of State|the Secretary|Department for Communities|the Department)\b[^.\n]{0,300}\b(?:must|shall|is to|is required to|will)\b[^.\n]*\.)",
    )
    .case_insensitive(true)
    .build()
    .expect("Failed to compile OBLIGATION_SENTENCE_RE")
});

static RESPONSIBILITY_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"([A-Z][^.\n]{0,300}\b(?:Secretary of State|Department for Communities|the Department)\b[^.\n]{0,200}\b(?:responsib|responsibilit|is to exercise|is responsible)\b[^.\n]*\.)",
    )
    .case_insensitive(true)
    .build()
    .expect("Failed to compile RESPONSIBILITY_SENTENCE_RE")
});

static STEP_SEQUENCE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"(Step\s*1[\s\S]{0,450}Step\s*2[\s\S]{0,450}Step\s*3[\s\S]{0,450})")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile STEP_SEQUENCE_RE")
});

static PENALTY_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"([^.]{0,120}\b(?:penalt|offenc|sanction|fine)\w*\b[^.]{0,120}\.)")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile PENALTY_SENTENCE_RE")
});

static RECORD_KEEPING_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"([^.]{0,120}\b(?:report|reporting|register|record|returns)\b[^.]{0,120}\.)")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile RECORD_KEEPING_SENTENCE_RE")
});

// --- Data Structures ---

/// The seven report fields, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Definitions,
    Obligations,
    Responsibilities,
    Eligibility,
    Payments,
    Penalties,
    RecordKeeping,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Definitions,
        Field::Obligations,
        Field::Responsibilities,
        Field::Eligibility,
        Field::Payments,
        Field::Penalties,
        Field::RecordKeeping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Definitions => "definitions",
            Field::Obligations => "obligations",
            Field::Responsibilities => "responsibilities",
            Field::Eligibility => "eligibility",
            Field::Payments => "payments",
            Field::Penalties => "penalties",
            Field::RecordKeeping => "record_keeping",
        }
    }

    /// Human-readable placeholder reported when no strategy in the field's
    /// chain matched anything.
    pub fn sentinel(self) -> &'static str {
        match self {
            Field::Definitions => "No explicit definitions block located.",
            Field::Obligations | Field::Responsibilities => {
                "No explicit obligations located by heuristics."
            }
            Field::Eligibility => {
                "No comprehensive eligibility criteria restated in this Act; \
                 see Universal Credit Regulations / Welfare Reform Act for full eligibility."
            }
            Field::Payments => {
                "Payment calculation/entitlement structure not clearly extracted by heuristics."
            }
            Field::Penalties => "No explicit penalties or enforcement clauses located.",
            Field::RecordKeeping => {
                "No explicit record-keeping or reporting obligations located."
            }
        }
    }

    fn strategies(self) -> &'static [Strategy] {
        match self {
            Field::Definitions => DEFINITIONS_CHAIN,
            Field::Obligations => OBLIGATIONS_CHAIN,
            Field::Responsibilities => RESPONSIBILITIES_CHAIN,
            Field::Eligibility => ELIGIBILITY_CHAIN,
            Field::Payments => PAYMENTS_CHAIN,
            Field::Penalties => PENALTIES_CHAIN,
            Field::RecordKeeping => RECORD_KEEPING_CHAIN,
        }
    }
}

/// One step in a field's fallback chain. Chains are tried strictly in order
/// and the first step yielding a non-empty span wins; the order encodes a
/// confidence ranking and must be preserved exactly.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Heading search bounded by the next structural marker or a character
    /// budget.
    Heading {
        patterns: &'static [&'static str],
        window: usize,
    },
    /// Fixed character window around a keyword; last-resort context only.
    Snippet {
        keyword: &'static str,
        before: usize,
        after: usize,
    },
    /// Field-specific regex collector over the whole text.
    Scan(fn(&str) -> String),
    /// Hand the text to another field's chain (its fallbacks apply
    /// transitively).
    Delegate(Field),
}

// --- Per-Field Strategy Chains ---

const DEFINITIONS_CHAIN: &[Strategy] = &[
    Strategy::Heading {
        patterns: &[
            r"\n\s*Definitions?\b",
            r"\bIn this (?:Act|section)\b",
            r"\bFor the purposes of this (?:Act|section)\b",
        ],
        window: DEFINITIONS_HEADING_WINDOW,
    },
    Strategy::Scan(scan_quoted_definitions),
    Strategy::Snippet {
        keyword: "consumer prices index",
        before: 60,
        after: 240,
    },
];

const OBLIGATIONS_CHAIN: &[Strategy] = &[
    Strategy::Scan(scan_obligation_sentences),
    Strategy::Heading {
        patterns: &[r"\n\s*Obligations?\b", r"\n\s*Duties?\b"],
        window: DEFAULT_HEADING_WINDOW,
    },
];

const RESPONSIBILITIES_CHAIN: &[Strategy] = &[
    Strategy::Scan(scan_responsibility_sentences),
    Strategy::Delegate(Field::Obligations),
];

const ELIGIBILITY_CHAIN: &[Strategy] = &[
    Strategy::Heading {
        patterns: &[r"\n\s*Eligibility\b", r"\n\s*Who may claim\b"],
        window: DEFAULT_HEADING_WINDOW,
    },
    Strategy::Scan(scan_eligibility_snippets),
];

const PAYMENTS_CHAIN: &[Strategy] = &[
    Strategy::Scan(scan_step_sequence),
    Strategy::Heading {
        patterns: &[
            r"\bstandard allowance\b",
            r"\buplift percentage\b",
            r"\bminimum amounts\b",
            r"\bamounts of the standard allowance\b",
        ],
        window: DEFAULT_HEADING_WINDOW,
    },
    Strategy::Snippet {
        keyword: "standard allowance",
        before: 60,
        after: 240,
    },
];

const PENALTIES_CHAIN: &[Strategy] = &[
    Strategy::Scan(scan_penalty_sentences),
    Strategy::Heading {
        patterns: &[r"\n\s*Offences?\b", r"\n\s*Penalt", r"\n\s*Penalties?\b"],
        window: DEFAULT_HEADING_WINDOW,
    },
];

const RECORD_KEEPING_CHAIN: &[Strategy] = &[
    Strategy::Scan(scan_record_keeping_sentences),
    Strategy::Heading {
        patterns: &[r"\n\s*Record-keeping\b", r"\n\s*Reporting\b", r"\n\s*Records\b"],
        window: DEFAULT_HEADING_WINDOW,
    },
];

// --- Scan Functions ---

/// Collects quoted-term "means" clauses and joins them as one
/// "term — meaning" line each, in text order.
fn scan_quoted_definitions(text: &str) -> String {
    let lines: Vec<String> = QUOTED_TERM_RE
        .captures_iter(text)
        .map(|cap| format!("{} — {}", &cap[1], cap[2].trim()))
        .collect();
    lines.join("\n")
}

/// Joins the sorted contents of an ordered set; deduplicated regex hits go
/// through here so re-runs are byte-identical regardless of match order.
fn join_sorted(set: BTreeSet<String>) -> String {
    set.into_iter().collect::<Vec<_>>().join("\n")
}

/// Sentences naming an administering authority together with a modal duty
/// (must/shall/is to/is required to/will).
fn scan_obligation_sentences(text: &str) -> String {
    let sentences: BTreeSet<String> = OBLIGATION_SENTENCE_RE
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    join_sorted(sentences)
}

/// Sentences naming an administering authority together with a
/// responsibility token.
fn scan_responsibility_sentences(text: &str) -> String {
    let sentences: BTreeSet<String> = RESPONSIBILITY_SENTENCE_RE
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    join_sorted(sentences)
}

/// One context snippet per claimant-category keyword present in the text,
/// joined with blank-line separators.
fn scan_eligibility_snippets(text: &str) -> String {
    let mut found = Vec::new();
    for keyword in ELIGIBILITY_KEYWORDS {
        let snippet = snippet_around(text, keyword, 40, 140);
        if !snippet.is_empty() {
            found.push(snippet);
        }
    }
    found.join("\n\n")
}

/// The first "Step 1 ... Step 2 ... Step 3" calculation block, with each gap
/// bounded at 450 characters.
fn scan_step_sequence(text: &str) -> String {
    match STEP_SEQUENCE_RE.captures(text) {
        Some(cap) => cap[1].trim().to_string(),
        None => String::new(),
    }
}

/// Short sentences containing a penalty-domain token.
fn scan_penalty_sentences(text: &str) -> String {
    let sentences: BTreeSet<String> = PENALTY_SENTENCE_RE
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    join_sorted(sentences)
}

/// Short sentences containing a reporting-domain token, capped to the first
/// matches in text order before deduplication.
fn scan_record_keeping_sentences(text: &str) -> String {
    let sentences: BTreeSet<String> = RECORD_KEEPING_SENTENCE_RE
        .captures_iter(text)
        .take(RECORD_KEEPING_MATCH_CAP)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    join_sorted(sentences)
}

// --- Extraction ---

/// Runs one field's strategy chain over the text. The first strategy that
/// yields a non-empty span wins; when the chain is exhausted the field's
/// sentinel is returned, so the result is never empty.
pub fn extract_field(field: Field, text: &NormalizedText) -> String {
    for strategy in field.strategies() {
        let found = match strategy {
            Strategy::Heading { patterns, window } => {
                locate_by_heading(text.as_str(), patterns, *window)
            }
            Strategy::Snippet {
                keyword,
                before,
                after,
            } => snippet_around(text.as_str(), keyword, *before, *after),
            Strategy::Scan(scan) => scan(text.as_str()),
            Strategy::Delegate(other) => extract_field(*other, text),
        };
        if !found.is_empty() {
            return found;
        }
    }
    tracing::debug!("No strategy matched for field '{}'", field.name());
    field.sentinel().to_string()
}

/// The seven extracted report fields. Every field is non-empty; serializes
/// as the seven-key `extracted_sections` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub definitions: String,
    pub obligations: String,
    pub responsibilities: String,
    pub eligibility: String,
    pub payments: String,
    pub penalties: String,
    pub record_keeping: String,
}

impl ExtractedFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Definitions => &self.definitions,
            Field::Obligations => &self.obligations,
            Field::Responsibilities => &self.responsibilities,
            Field::Eligibility => &self.eligibility,
            Field::Payments => &self.payments,
            Field::Penalties => &self.penalties,
            Field::RecordKeeping => &self.record_keeping,
        }
    }
}

/// Runs all seven extractors. Each reads only the normalized text, so there
/// is no ordering dependency between them.
pub fn extract_all(text: &NormalizedText) -> ExtractedFields {
    ExtractedFields {
        definitions: extract_field(Field::Definitions, text),
        obligations: extract_field(Field::Obligations, text),
        responsibilities: extract_field(Field::Responsibilities, text),
        eligibility: extract_field(Field::Eligibility, text),
        payments: extract_field(Field::Payments, text),
        penalties: extract_field(Field::Penalties, text),
        record_keeping: extract_field(Field::RecordKeeping, text),
    }
}
