// src/document/mod.rs
use std::fs;
use std::path::Path;

use crate::utils::error::DocumentError;

/// Reads raw document text from a local file. PDF input is decoded with
/// pdf-extract; anything else is treated as plain text.
pub fn read_document_text(path: &Path) -> Result<String, DocumentError> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        let bytes = fs::read(path)?;
        extract_pdf_text(&bytes)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Decodes the text of every page of a PDF. Pages that cannot be decoded
/// contribute empty text rather than failing the document; only a document
/// that cannot be parsed at all surfaces as an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    if let Ok(doc) = pdf_extract::Document::load_mem(bytes) {
        tracing::info!("Loaded PDF with {} pages", doc.get_pages().len());
    }

    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))?;
    tracing::debug!("Extracted {} characters of raw text", text.len());
    Ok(text)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_files_are_read_directly() {
        let path = std::env::temp_dir().join(format!("act-analyzer-doc-{}.txt", std::process::id()));
        fs::write(&path, "Short title\nThis Act may be cited as the Test Act.").unwrap();
        let text = read_document_text(&path).unwrap();
        assert!(text.contains("Test Act"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unparseable_pdf_bytes_surface_as_an_error() {
        let result = extract_pdf_text(b"not a pdf at all");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let result = read_document_text(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }
}
