//! Local upload validation, run before anything touches the network.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Largest upload the service accepts.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Validation failures reported at the Upload state. They block
/// submission; no request is issued for an invalid file.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No file selected")]
    Missing,

    #[error("Please upload a PDF file")]
    NotPdf,

    #[error("File size should be less than 10MB")]
    TooLarge,

    #[error("Failed to read file: {0}")]
    Unreadable(#[from] io::Error),
}

/// Check that `bytes` is a PDF within the service's size limit.
pub fn validate_upload(bytes: &[u8]) -> Result<(), ValidationError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ValidationError::NotPdf);
    }
    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

/// Read the document at `path` and validate it for upload.
pub fn load_upload(path: &Path) -> Result<Vec<u8>, ValidationError> {
    if !path.is_file() {
        return Err(ValidationError::Missing);
    }
    let bytes = fs::read(path)?;
    validate_upload(&bytes)?;
    Ok(bytes)
}
