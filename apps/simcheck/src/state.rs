//! Upload/result view state machine.

use thiserror::Error;

use shared_types::AnalysisResult;

/// The view is in exactly one of these states. An error message can
/// only exist alongside the upload form, never alongside results.
#[derive(Debug, Clone)]
pub enum ViewState {
    Upload,
    Loading,
    Results(AnalysisResult),
    UploadWithError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("A document is already being analyzed")]
    UploadInFlight,

    #[error("Results are already showing; reset first")]
    ResultsShowing,

    #[error("No analysis is in flight")]
    NotLoading,
}

/// Drives the Upload -> Loading -> Results lifecycle with one
/// in-flight request at a time: submission is only accepted while the
/// upload form is showing.
#[derive(Debug)]
pub struct ViewSession {
    state: ViewState,
}

impl ViewSession {
    pub fn new() -> Self {
        Self {
            state: ViewState::Upload,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// `Upload -> Loading`, from the plain or error-bearing upload form.
    pub fn begin_upload(&mut self) -> Result<(), StateError> {
        match self.state {
            ViewState::Upload | ViewState::UploadWithError(_) => {
                self.state = ViewState::Loading;
                Ok(())
            }
            ViewState::Loading => Err(StateError::UploadInFlight),
            ViewState::Results(_) => Err(StateError::ResultsShowing),
        }
    }

    /// `Loading -> Results`, the successful completion of the one
    /// in-flight request.
    pub fn complete(&mut self, result: AnalysisResult) -> Result<(), StateError> {
        match self.state {
            ViewState::Loading => {
                self.state = ViewState::Results(result);
                Ok(())
            }
            _ => Err(StateError::NotLoading),
        }
    }

    /// `Loading -> UploadWithError`, carrying the user-visible message.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), StateError> {
        match self.state {
            ViewState::Loading => {
                self.state = ViewState::UploadWithError(message.into());
                Ok(())
            }
            _ => Err(StateError::NotLoading),
        }
    }

    /// Full discard of prior results and error state.
    pub fn try_again(&mut self) {
        self.state = ViewState::Upload;
    }
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> AnalysisResult {
        AnalysisResult {
            metadata: Default::default(),
            statistics: Default::default(),
            paragraphs: Vec::new(),
            total_sources_found: 0,
            scores: Default::default(),
        }
    }

    #[test]
    fn happy_path_reaches_results() {
        let mut session = ViewSession::new();
        session.begin_upload().unwrap();
        assert!(matches!(session.state(), ViewState::Loading));
        session.complete(empty_result()).unwrap();
        assert!(matches!(session.state(), ViewState::Results(_)));
    }

    #[test]
    fn failure_returns_to_upload_with_message() {
        let mut session = ViewSession::new();
        session.begin_upload().unwrap();
        session.fail("Failed to analyze document. Please try again.").unwrap();
        match session.state() {
            ViewState::UploadWithError(message) => {
                assert_eq!(message, "Failed to analyze document. Please try again.");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn resubmission_is_allowed_after_a_failure() {
        let mut session = ViewSession::new();
        session.begin_upload().unwrap();
        session.fail("boom").unwrap();
        assert!(session.begin_upload().is_ok());
    }

    #[test]
    fn concurrent_submission_is_rejected() {
        let mut session = ViewSession::new();
        session.begin_upload().unwrap();
        assert_eq!(session.begin_upload(), Err(StateError::UploadInFlight));
    }

    #[test]
    fn submission_from_results_requires_reset() {
        let mut session = ViewSession::new();
        session.begin_upload().unwrap();
        session.complete(empty_result()).unwrap();
        assert_eq!(session.begin_upload(), Err(StateError::ResultsShowing));

        session.try_again();
        assert!(matches!(session.state(), ViewState::Upload));
        assert!(session.begin_upload().is_ok());
    }

    #[test]
    fn completion_without_a_request_is_rejected() {
        let mut session = ViewSession::new();
        assert_eq!(session.complete(empty_result()), Err(StateError::NotLoading));
        assert_eq!(session.fail("late"), Err(StateError::NotLoading));
    }

    #[test]
    fn try_again_discards_results() {
        let mut session = ViewSession::new();
        session.begin_upload().unwrap();
        session.complete(empty_result()).unwrap();
        session.try_again();
        assert!(matches!(session.state(), ViewState::Upload));
    }
}
