use tracing::error;

use crate::api::AnalysisService;
use crate::model::{format_date_time, AnalysisBatch, RiskLevel};

use super::most_recent_first;

pub const NO_DATASETS: &str = "No datasets uploaded yet";
pub const NO_REPORTS: &str = "No reports generated yet";
pub const SELECT_DATASET: &str = "Select a dataset above to view full detailed reports.";

/// One row of the uploaded-datasets table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: i64,
    pub id_label: String,
    pub uploaded: String,
    pub risk_level: RiskLevel,
    pub status: &'static str,
}

impl ReportRow {
    fn from_batch(batch: &AnalysisBatch) -> Self {
        Self {
            id: batch.id,
            id_label: batch.display_id(),
            uploaded: format_date_time(batch.analyzed_at),
            risk_level: batch.risk_level,
            status: "Processed",
        }
    }
}

/// Every batch, newest first.
pub fn report_rows(history: &[AnalysisBatch]) -> Vec<ReportRow> {
    most_recent_first(history, None)
        .iter()
        .map(ReportRow::from_batch)
        .collect()
}

/// Message for the detailed-reports panel.
pub fn reports_hint(rows: &[ReportRow]) -> &'static str {
    if rows.is_empty() {
        NO_REPORTS
    } else {
        SELECT_DATASET
    }
}

/// Fetch history as table rows. A failed fetch is logged and yields no rows.
pub async fn load_reports<S: AnalysisService>(service: &S) -> Vec<ReportRow> {
    match service.list_history().await {
        Ok(history) => report_rows(&history),
        Err(e) => {
            error!("Failed to load history: {}", e);
            Vec::new()
        }
    }
}
