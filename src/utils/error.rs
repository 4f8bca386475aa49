// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum LegislationError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 404 Not Found, 403 Forbidden

    #[error("Act document not found: {0}")]
    DocNotFound(String),

    #[error("Invalid act reference '{0}', expected year/chapter (e.g. 2025/22)")]
    InvalidReference(String),
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("legislation.gov.uk interaction failed: {0}")]
    Legislation(#[from] LegislationError),

    #[error("Document reading failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
