//! Resume text extraction from uploaded files.
//!
//! PDF parsing runs entirely in memory; nothing is written to disk. Plain
//! text must be UTF-8. Everything else is rejected up front so the caller
//! gets a 400 instead of garbage text scoring poorly.

use crate::errors::AppError;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt"];

pub fn extract_resume_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    match extension_of(filename).as_deref() {
        Some("pdf") => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}"))),
        Some("txt") => String::from_utf8(data.to_vec())
            .map_err(|e| AppError::Extraction(format!("Text file is not valid UTF-8: {e}"))),
        _ => Err(AppError::UnsupportedFileType(format!(
            "Cannot read '{filename}'. Supported formats: {}",
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}

fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}
