//! Revenue/expense series for one batch.
//!
//! Periods keep the order the service returns them in. Labels such as
//! "Q1-2023" and "2023-Jan" do not sort as text, so no sorting is applied.

use tracing::error;

use crate::api::AnalysisService;
use crate::model::FinancialRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub periods: Vec<String>,
    pub revenue: Vec<f64>,
    pub expenses: Vec<f64>,
}

impl ChartData {
    pub fn from_records(records: &[FinancialRecord]) -> Self {
        Self {
            periods: records.iter().map(|r| r.period.clone()).collect(),
            revenue: records.iter().map(|r| r.total_revenue).collect(),
            expenses: records.iter().map(|r| r.total_expenses).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Smallest and largest value across both series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.revenue
            .iter()
            .chain(self.expenses.iter())
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// The chart shows a placeholder until the first successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChartState {
    #[default]
    Loading,
    Ready(ChartData),
}

/// Fetch a batch's records. `None` means the fetch failed and was logged.
pub async fn load_chart<S: AnalysisService>(service: &S, batch_key: &str) -> Option<ChartData> {
    match service.list_records(batch_key).await {
        Ok(records) => Some(ChartData::from_records(&records)),
        Err(e) => {
            error!("Failed to load chart data for batch {}: {}", batch_key, e);
            None
        }
    }
}
