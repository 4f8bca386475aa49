// src/extractors/mod.rs
pub mod fields;
pub mod locator;
pub mod normalize;

// Re-export the pipeline surface for convenience
pub use fields::{extract_all, ExtractedFields, Field};
pub use normalize::{normalize, NormalizedText};
