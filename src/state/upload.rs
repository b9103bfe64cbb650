//! Upload form state machine.
//!
//! `Idle -> FileSelected -> Submitting -> Succeeded | Failed`. A failed
//! submit keeps the selected file so the user can retry; a successful one
//! clears it.

use tracing::error;

use crate::api::DatasetFile;
use crate::error::TransportError;
use crate::handoff::UploadResult;
use crate::model::AnalysisBatch;

pub const SELECT_FILE_FIRST: &str = "Please select a file first.";
pub const UPLOAD_FAILED: &str = "Upload failed. Please check the server logs.";

/// File extensions offered by the picker. The service does the real validation.
pub const ACCEPTED_FORMATS: &str = ".csv,.xlsx,.xls";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    file: Option<DatasetFile>,
    phase: UploadPhase,
    error: Option<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }

    /// Submit is inert without a file or while a submit is in flight.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Analyzing..."
        } else {
            "Upload & Analyze"
        }
    }

    /// Ignored while a submit is in flight.
    pub fn select_file(&mut self, file: DatasetFile) {
        if self.is_submitting() {
            return;
        }
        self.file = Some(file);
        self.error = None;
        self.phase = UploadPhase::FileSelected;
    }

    /// The picker was cleared or cancelled. Ignored while a submit is in flight.
    pub fn clear_file(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.file = None;
        self.error = None;
        self.phase = UploadPhase::Idle;
    }

    /// The newly picked file could not be read. Whatever was selected before
    /// is dropped so it cannot be uploaded in its place.
    pub fn read_failed(&mut self, cause: &str) {
        if self.is_submitting() {
            return;
        }
        self.file = None;
        self.fail(cause);
    }

    /// Move to `Submitting` and hand out a copy of the file to send.
    ///
    /// Returns `None` when there is nothing to submit; with no file selected
    /// this also sets the "select a file" message.
    pub fn begin_submit(&mut self) -> Option<DatasetFile> {
        if self.is_submitting() {
            return None;
        }
        match &self.file {
            Some(file) => {
                self.error = None;
                self.phase = UploadPhase::Submitting;
                Some(file.clone())
            }
            None => {
                self.error = Some(SELECT_FILE_FIRST.to_string());
                None
            }
        }
    }

    /// Apply the service's answer. On success the file is cleared and the
    /// result is returned for the Analysis page.
    pub fn complete(&mut self, outcome: Result<AnalysisBatch, TransportError>) -> Option<UploadResult> {
        match outcome {
            Ok(batch) => {
                self.file = None;
                self.error = None;
                self.phase = UploadPhase::Succeeded;
                Some(UploadResult::new(batch))
            }
            Err(e) => {
                self.fail(&e.to_string());
                None
            }
        }
    }

    /// Record a failure. The cause is logged; the user sees a generic message.
    pub fn fail(&mut self, cause: &str) {
        error!("Upload failed: {}", cause);
        self.error = Some(UPLOAD_FAILED.to_string());
        self.phase = UploadPhase::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;

    fn csv() -> DatasetFile {
        DatasetFile::new("q1.csv", b"period,revenue,expenses\n".to_vec())
    }

    fn batch() -> AnalysisBatch {
        AnalysisBatch {
            id: 1,
            batch_id: Some("b1".to_string()),
            analyzed_at: None,
            risk_level: RiskLevel::Low,
            risk_factors: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_submit_disabled_until_file_selected() {
        let mut form = UploadForm::new();
        assert_eq!(form.phase(), UploadPhase::Idle);
        assert!(!form.can_submit());

        form.select_file(csv());
        assert_eq!(form.phase(), UploadPhase::FileSelected);
        assert_eq!(form.file_name(), Some("q1.csv"));
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_without_file_asks_for_one() {
        let mut form = UploadForm::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(SELECT_FILE_FIRST));
        assert_eq!(form.phase(), UploadPhase::Idle);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_selecting_file_clears_error() {
        let mut form = UploadForm::new();
        form.begin_submit();
        form.select_file(csv());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_submit_inert_while_submitting() {
        let mut form = UploadForm::new();
        form.select_file(csv());
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "Analyzing...");
        assert!(form.begin_submit().is_none());

        form.select_file(DatasetFile::new("other.csv", vec![]));
        assert_eq!(form.file_name(), Some("q1.csv"));
    }

    #[test]
    fn test_success_clears_file_and_disables_submit() {
        let mut form = UploadForm::new();
        form.select_file(csv());
        form.begin_submit();

        let result = form.complete(Ok(batch())).unwrap();
        assert_eq!(result.batch().id, 1);
        assert_eq!(form.phase(), UploadPhase::Succeeded);
        assert_eq!(form.file_name(), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_failure_keeps_file_for_retry() {
        let mut form = UploadForm::new();
        form.select_file(csv());
        form.begin_submit();

        let result = form.complete(Err(TransportError::Request("connection refused".to_string())));
        assert!(result.is_none());
        assert_eq!(form.phase(), UploadPhase::Failed);
        assert_eq!(form.error(), Some(UPLOAD_FAILED));
        assert_eq!(form.file_name(), Some("q1.csv"));
        assert!(form.can_submit());
        assert_eq!(form.submit_label(), "Upload & Analyze");
    }

    #[test]
    fn test_unreadable_file_replaces_previous_selection() {
        let mut form = UploadForm::new();
        form.select_file(DatasetFile::new("old.csv", vec![]));
        form.read_failed("Failed to read file");

        assert_eq!(form.phase(), UploadPhase::Failed);
        assert_eq!(form.error(), Some(UPLOAD_FAILED));
        assert_eq!(form.file_name(), None);
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_cancelled_picker_clears_selection() {
        let mut form = UploadForm::new();
        form.select_file(csv());
        form.clear_file();

        assert_eq!(form.phase(), UploadPhase::Idle);
        assert_eq!(form.file_name(), None);
        assert!(!form.can_submit());
    }
}
