//! Dashboard summary figures.
//!
//! The service exposes no aggregate endpoint, so the dataset and analysis
//! counts are both the history length and are labelled as approximate.
//! There is no score in the payload, so the average score is always
//! reported as unavailable.

use tracing::error;

use crate::api::AnalysisService;
use crate::model::{AnalysisBatch, RiskLevel};

use super::most_recent_first;

pub const RECENT_LIMIT: usize = 5;
pub const NO_DATA: &str = "No data";
pub const UNAVAILABLE: &str = "Unavailable";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_datasets: usize,
    pub total_analyses: usize,
    pub latest_risk_level: Option<RiskLevel>,
    /// Always `None` until the service reports scores.
    pub average_risk_score: Option<f64>,
    pub recent: Vec<AnalysisBatch>,
    pub distribution: Vec<(RiskLevel, usize)>,
}

impl DashboardSummary {
    pub fn from_history(history: &[AnalysisBatch]) -> Self {
        let distribution = RiskLevel::ALL
            .iter()
            .map(|&level| {
                let count = history.iter().filter(|b| b.risk_level == level).count();
                (level, count)
            })
            .collect();

        Self {
            total_datasets: history.len(),
            total_analyses: history.len(),
            latest_risk_level: history.last().map(|b| b.risk_level),
            average_risk_score: None,
            recent: most_recent_first(history, Some(RECENT_LIMIT)),
            distribution,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_analyses == 0
    }

    pub fn latest_risk_label(&self) -> &'static str {
        self.latest_risk_level.map(RiskLevel::label).unwrap_or(NO_DATA)
    }

    pub fn average_risk_score_label(&self) -> String {
        self.average_risk_score
            .map(|score| format!("{:.1}", score))
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }
}

/// Fetch history and summarise it. A failed fetch is logged and yields the
/// empty summary.
pub async fn load_dashboard<S: AnalysisService>(service: &S) -> DashboardSummary {
    match service.list_history().await {
        Ok(history) => DashboardSummary::from_history(&history),
        Err(e) => {
            error!("Failed to load dashboard data: {}", e);
            DashboardSummary::from_history(&[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(id: i64, level: RiskLevel) -> AnalysisBatch {
        AnalysisBatch {
            id,
            batch_id: None,
            analyzed_at: None,
            risk_level: level,
            risk_factors: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_empty_history() {
        let summary = DashboardSummary::from_history(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_datasets, 0);
        assert_eq!(summary.latest_risk_label(), NO_DATA);
        assert_eq!(summary.average_risk_score_label(), UNAVAILABLE);
        assert!(summary.recent.is_empty());
        assert!(summary.distribution.iter().all(|&(_, n)| n == 0));
    }

    #[test]
    fn test_latest_level_comes_from_last_item() {
        let history = vec![batch(1, RiskLevel::High), batch(2, RiskLevel::Low)];
        let summary = DashboardSummary::from_history(&history);
        assert_eq!(summary.total_datasets, 2);
        assert_eq!(summary.total_analyses, 2);
        assert_eq!(summary.latest_risk_level, Some(RiskLevel::Low));
        assert_eq!(summary.latest_risk_label(), "Low");
    }

    #[test]
    fn test_recent_is_last_five_newest_first() {
        let history: Vec<_> = (1..=8).map(|id| batch(id, RiskLevel::Medium)).collect();
        let summary = DashboardSummary::from_history(&history);
        let ids: Vec<i64> = summary.recent.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_distribution_counts_each_level() {
        let history = vec![
            batch(1, RiskLevel::High),
            batch(2, RiskLevel::Low),
            batch(3, RiskLevel::High),
            batch(4, RiskLevel::Unknown),
        ];
        let summary = DashboardSummary::from_history(&history);
        assert_eq!(
            summary.distribution,
            vec![
                (RiskLevel::Low, 1),
                (RiskLevel::Medium, 0),
                (RiskLevel::High, 2),
                (RiskLevel::Unknown, 1),
            ]
        );
    }
}
