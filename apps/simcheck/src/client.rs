//! Upload client for the analysis service.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, error};

use shared_types::AnalysisResult;

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with status {0}")]
    Status(StatusCode),
}

impl UploadError {
    /// Generic retry prompt shown to the user; the specific cause goes
    /// to the diagnostic log only.
    pub fn user_message(&self) -> &'static str {
        "Failed to analyze document. Please try again."
    }
}

/// Thin `reqwest` wrapper holding the injected configuration. Requests
/// carry no client-side timeout: an in-flight analysis runs to
/// completion or transport failure.
pub struct UploadClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl UploadClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// POST the document as the single multipart field `file` and
    /// decode the analysis result from the response body.
    pub async fn analyze(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult, UploadError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let url = self.config.analyze_url();
        debug!(%url, "submitting document for analysis");
        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "analysis service rejected the upload");
            return Err(UploadError::Status(status));
        }

        Ok(response.json().await?)
    }
}
