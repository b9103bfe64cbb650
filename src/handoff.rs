//! Passing a fresh upload result from the Upload page to the Analysis page.
//!
//! The result lives only in memory: it is consumed by the first reader,
//! dropped when the user navigates anywhere else, and gone after a reload.

use std::sync::{Arc, Mutex, PoisonError};

use crate::model::AnalysisBatch;

/// The analysis produced by a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    batch: AnalysisBatch,
}

impl UploadResult {
    pub fn new(batch: AnalysisBatch) -> Self {
        Self { batch }
    }

    pub fn batch(&self) -> &AnalysisBatch {
        &self.batch
    }

    pub fn into_batch(self) -> AnalysisBatch {
        self.batch
    }
}

/// Single-slot mailbox shared through the app context.
#[derive(Debug, Clone, Default)]
pub struct ResultHandoff {
    slot: Arc<Mutex<Option<UploadResult>>>,
}

impl ResultHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result for the next reader, replacing any unread one.
    pub fn deliver(&self, result: UploadResult) {
        *self.lock() = Some(result);
    }

    /// Consume the pending result, if any.
    pub fn take(&self) -> Option<UploadResult> {
        self.lock().take()
    }

    pub fn discard(&self) {
        self.lock().take();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<UploadResult>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
