//! Page-level view state.
//!
//! Each page owns its state exclusively; nothing here is shared between
//! pages. The loaders take any [`AnalysisService`](crate::api::AnalysisService)
//! so they run the same against the HTTP client and test fakes.

pub mod analysis;
pub mod chart;
pub mod dashboard;
pub mod guard;
pub mod reports;
pub mod upload;

use crate::model::AnalysisBatch;

/// History reversed to newest first, optionally truncated.
pub fn most_recent_first(history: &[AnalysisBatch], limit: Option<usize>) -> Vec<AnalysisBatch> {
    history
        .iter()
        .rev()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}
