//! Client configuration.

/// Path of the analysis endpoint, relative to the configured base URL.
const ANALYZE_PATH: &str = "/api/plagiarism-detection/";

/// Immutable configuration injected into the upload client at
/// construction. The base URL is the only externally configurable
/// value.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }
}
