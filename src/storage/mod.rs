// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::normalize::NormalizedText;
use crate::report::Report;
use crate::rules::RuleCheck;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    fn write_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;
        tracing::info!("Saved {}", file_path.display());
        Ok(file_path)
    }

    /// Saves the full report (bullets, sections, checklist, provenance)
    pub fn save_report(&self, report: &Report) -> Result<PathBuf, StorageError> {
        self.write_json("report.json", report)
    }

    /// Saves the rule checklist as its own artifact
    pub fn save_rule_checks(&self, checks: &[RuleCheck]) -> Result<PathBuf, StorageError> {
        self.write_json("rule_checks.json", &checks)
    }

    /// Saves the summary bullets as their own artifact
    pub fn save_summary(&self, report: &Report) -> Result<PathBuf, StorageError> {
        self.write_json("summary.json", &report.summary())
    }

    /// Saves the normalized full text for inspection
    pub fn save_fulltext(&self, text: &NormalizedText) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join("fulltext.txt");
        fs::write(&file_path, text.as_str()).map_err(StorageError::IoError)?;
        tracing::info!("Saved {}", file_path.display());
        Ok(file_path)
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fields::extract_all;
    use crate::extractors::normalize::normalize;
    use crate::report::assemble;
    use crate::rules::run_rule_checks;

    fn temp_output_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("act-analyzer-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn writes_all_json_artifacts() {
        let dir = temp_output_dir("artifacts");
        let storage = StorageManager::new(&dir).unwrap();

        let text = normalize("Step 1 a. Step 2 b. Step 3 c.");
        let fields = extract_all(&text);
        let checks = run_rule_checks(&fields);
        let report = assemble("test-input.txt", fields, checks);

        let report_path = storage.save_report(&report).unwrap();
        let checks_path = storage.save_rule_checks(&report.rule_checks).unwrap();
        let summary_path = storage.save_summary(&report).unwrap();
        let fulltext_path = storage.save_fulltext(&text).unwrap();

        for path in [&report_path, &checks_path, &summary_path, &fulltext_path] {
            assert!(path.exists());
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(parsed["source"], "test-input.txt");
        assert_eq!(parsed["rule_checks"].as_array().unwrap().len(), 6);

        fs::remove_dir_all(&dir).unwrap();
    }
}
