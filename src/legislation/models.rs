// src/legislation/models.rs
use serde::{Deserialize, Serialize};

use crate::utils::error::LegislationError;

/// A UK Public General Act, identified by calendar year and chapter number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActReference {
    pub year: u32,
    pub chapter: u32,
}

impl ActReference {
    /// Parses a "year/chapter" reference, e.g. "2025/22".
    pub fn parse(reference: &str) -> Result<Self, LegislationError> {
        let (year, chapter) = reference
            .split_once('/')
            .ok_or_else(|| LegislationError::InvalidReference(reference.to_string()))?;
        let year = year
            .trim()
            .parse()
            .map_err(|_| LegislationError::InvalidReference(reference.to_string()))?;
        let chapter = chapter
            .trim()
            .parse()
            .map_err(|_| LegislationError::InvalidReference(reference.to_string()))?;
        Ok(Self { year, chapter })
    }

    /// URL of the PDF rendering on legislation.gov.uk.
    pub fn pdf_url(&self) -> String {
        format!(
            "https://www.legislation.gov.uk/ukpga/{}/{}/data.pdf",
            self.year, self.chapter
        )
    }
}
