// src/report/mod.rs

// --- Imports ---
use serde::Serialize;

use crate::extractors::fields::ExtractedFields;
use crate::rules::RuleCheck;

/// Static summary bullets, authored independently of the analyzed document.
/// They are merged into the report at assembly time and never derived from
/// the extracted fields.
pub const SUMMARY_BULLETS: [&str; 7] = [
    "Purpose: Sets minimum amounts for Universal Credit standard allowance and certain elements for tax years 2026\u{2013}27 to 2029\u{2013}30 and updates related regulations.",
    "Key definitions: Contains definitions for calculation terms (e.g., 'consumer prices index', 'relevant power', 'standard allowance', 'tax year').",
    "Eligibility: References claimant categories (pre-2026 claimant; severe conditions criteria claimant; claimant who is terminally ill) but does not fully restate general eligibility rules.",
    "Obligations & responsibilities: Requires the Secretary of State (and corresponding NI department) to exercise specified powers to secure amounts and make regulatory amendments.",
    "Payments/Entitlements: Prescribes a step-wise calculation (baseline \u{2192} CPI increase \u{2192} uplift percentage) and specifies uplift percentages for the tax years in scope.",
    "Enforcement: No explicit new sanctions, fines or criminal offence clauses were located by heuristics.",
    "Record-keeping/reporting: No explicit reporting or record-keeping duties were located in the Act text.",
];

/// The terminal artifact of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub generated_at: String,
    pub summary_bullets: Vec<String>,
    pub extracted_sections: ExtractedFields,
    pub rule_checks: Vec<RuleCheck>,
}

/// The summary bullets alone, persisted as their own artifact.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub source: String,
    pub generated_at: String,
    pub summary_bullets: Vec<String>,
}

impl Report {
    pub fn summary(&self) -> Summary {
        Summary {
            source: self.source.clone(),
            generated_at: self.generated_at.clone(),
            summary_bullets: self.summary_bullets.clone(),
        }
    }
}

/// Packages the extracted fields, the checklist, the static bullets and the
/// provenance metadata into the final report.
pub fn assemble(source: &str, sections: ExtractedFields, rule_checks: Vec<RuleCheck>) -> Report {
    Report {
        source: source.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        summary_bullets: SUMMARY_BULLETS.iter().map(|b| b.to_string()).collect(),
        extracted_sections: sections,
        rule_checks,
    }
}
