//! Which analysis the Risk Analysis page shows, and its insight lists.

use tracing::error;

use crate::api::AnalysisService;
use crate::handoff::UploadResult;
use crate::model::AnalysisBatch;

pub const NO_RISKS: &str = "No significant risks identified.";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisSelection {
    /// Handed over by the Upload page.
    FromUpload(AnalysisBatch),
    /// Last item of the history.
    Latest(AnalysisBatch),
    /// No analyses exist (or history could not be fetched).
    Empty,
}

impl AnalysisSelection {
    pub fn batch(&self) -> Option<&AnalysisBatch> {
        match self {
            AnalysisSelection::FromUpload(b) | AnalysisSelection::Latest(b) => Some(b),
            AnalysisSelection::Empty => None,
        }
    }

    /// The most recent entry in `history`, if any.
    pub fn latest_of(mut history: Vec<AnalysisBatch>) -> Self {
        history.pop().map_or(AnalysisSelection::Empty, AnalysisSelection::Latest)
    }
}

/// Pick the analysis to show. A fresh upload wins and skips the fetch
/// entirely; otherwise the newest history entry is used.
pub async fn select_analysis<S: AnalysisService>(
    handoff: Option<UploadResult>,
    service: &S,
) -> AnalysisSelection {
    if let Some(result) = handoff {
        return AnalysisSelection::FromUpload(result.into_batch());
    }

    match service.list_history().await {
        Ok(history) => AnalysisSelection::latest_of(history),
        Err(e) => {
            error!("Failed to load analysis: {}", e);
            AnalysisSelection::Empty
        }
    }
}

/// Items to list, or the message shown in their place.
#[derive(Debug, Clone, PartialEq)]
pub enum InsightList {
    Items(Vec<String>),
    Fallback(&'static str),
}

impl InsightList {
    fn from_items(items: &[String], fallback: &'static str) -> Self {
        if items.is_empty() {
            InsightList::Fallback(fallback)
        } else {
            InsightList::Items(items.to_vec())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub risk_factors: InsightList,
    pub recommendations: InsightList,
}

impl Insights {
    pub fn for_batch(batch: &AnalysisBatch) -> Self {
        Self {
            risk_factors: InsightList::from_items(&batch.risk_factors, NO_RISKS),
            recommendations: InsightList::from_items(&batch.recommendations, NO_RECOMMENDATIONS),
        }
    }
}
