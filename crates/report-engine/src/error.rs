use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to encode page content: {0}")]
    Encode(String),

    #[error("Failed to serialize report: {0}")]
    Save(String),
}
