//! Types returned by the analysis service.
//!
//! Field names follow the service's camelCase JSON.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Separator the service uses when it flattens a list into one string.
pub const LEGACY_LIST_DELIMITER: &str = " | ";

/// Risk classification assigned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Missing or unrecognised value.
    #[default]
    Unknown,
}

impl RiskLevel {
    /// Every level, in display order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }

    /// CSS modifier used by badges and stat values.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
            RiskLevel::Unknown => "risk-unknown",
        }
    }
}

impl From<Option<String>> for RiskLevel {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("low") => RiskLevel::Low,
            Some("medium") => RiskLevel::Medium,
            Some("high") => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }
}

/// One uploaded dataset plus its computed analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBatch {
    pub id: i64,
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub analyzed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default, deserialize_with = "item_list")]
    pub risk_factors: Vec<String>,
    #[serde(default, deserialize_with = "item_list")]
    pub recommendations: Vec<String>,
}

impl AnalysisBatch {
    /// Key used to fetch this batch's financial records.
    ///
    /// Records are stored under the string batch id; batches without one
    /// fall back to their numeric id.
    pub fn records_key(&self) -> String {
        match self.batch_id.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => self.id.to_string(),
        }
    }

    /// Human-readable identifier shown in lists and tables.
    pub fn display_id(&self) -> String {
        format!("#{}", self.id)
    }
}

/// One period of figures inside a batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub period: String,
    pub total_revenue: f64,
    pub total_expenses: f64,
    #[serde(default)]
    pub profit_margin: Option<f64>,
    #[serde(default)]
    pub technology_costs: Option<f64>,
    #[serde(default)]
    pub batch_id: Option<String>,
}

/// Split a legacy `" | "`-joined string into its items.
///
/// Surrounding whitespace is dropped and blank items are skipped, so a
/// blank input yields no items.
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split(LEGACY_LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lists arrive either as a delimited string or as a JSON array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Joined(String),
    Items(Vec<String>),
}

fn item_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawList>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(RawList::Joined(s)) => split_items(&s),
        Some(RawList::Items(items)) => items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    })
}

/// Accepts the service's zone-less timestamps as well as RFC 3339 ones.
/// Anything unparseable decodes to `None` instead of failing the payload.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            DateTime::<FixedOffset>::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// `2024-03-01`, or `-` when the timestamp is missing.
pub fn format_date(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `2024-03-01 14:05`, or `-` when the timestamp is missing.
pub fn format_date_time(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_service_payload() {
        let json = r#"{
            "id": 7,
            "batchId": "3f2a-77",
            "analyzedAt": "2024-03-01T14:05:09.123456",
            "riskLevel": "High",
            "riskFactors": "Negative profit margin | Expenses growing faster than revenue",
            "recommendations": null
        }"#;

        let batch: AnalysisBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.id, 7);
        assert_eq!(batch.batch_id.as_deref(), Some("3f2a-77"));
        assert_eq!(batch.risk_level, RiskLevel::High);
        assert_eq!(
            batch.risk_factors,
            vec![
                "Negative profit margin".to_string(),
                "Expenses growing faster than revenue".to_string()
            ]
        );
        assert!(batch.recommendations.is_empty());
        assert_eq!(format_date(batch.analyzed_at), "2024-03-01");
        assert_eq!(format_date_time(batch.analyzed_at), "2024-03-01 14:05");
    }

    #[test]
    fn test_decode_list_as_json_array() {
        let json = r#"{"id": 1, "riskLevel": "low", "recommendations": ["Keep reserves", " ", "Review costs"]}"#;
        let batch: AnalysisBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.risk_level, RiskLevel::Low);
        assert_eq!(batch.recommendations, vec!["Keep reserves", "Review costs"]);
        assert!(batch.risk_factors.is_empty());
        assert_eq!(batch.analyzed_at, None);
    }

    #[test]
    fn test_unrecognised_risk_level_is_unknown() {
        let json = r#"[{"id": 1, "riskLevel": "Severe"}, {"id": 2, "riskLevel": null}, {"id": 3}]"#;
        let batches: Vec<AnalysisBatch> = serde_json::from_str(json).unwrap();
        assert!(batches.iter().all(|b| b.risk_level == RiskLevel::Unknown));
    }

    #[test]
    fn test_risk_level_is_case_insensitive() {
        assert_eq!(RiskLevel::from(Some("MEDIUM".to_string())), RiskLevel::Medium);
        assert_eq!(RiskLevel::from(Some(" high ".to_string())), RiskLevel::High);
        assert_eq!(RiskLevel::from(Some("severe".to_string())), RiskLevel::Unknown);
    }

    #[test]
    fn test_split_items_keeps_order() {
        assert_eq!(split_items("A | B | C"), vec!["A", "B", "C"]);
        assert!(split_items("").is_empty());
        assert!(split_items("   ").is_empty());
        assert_eq!(split_items("Only one"), vec!["Only one"]);
    }

    #[test]
    fn test_bad_timestamp_does_not_fail_payload() {
        let json = r#"{"id": 4, "analyzedAt": "yesterday", "riskLevel": "Low"}"#;
        let batch: AnalysisBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.analyzed_at, None);
        assert_eq!(format_date(batch.analyzed_at), "-");
    }

    #[test]
    fn test_rfc3339_timestamp_accepted() {
        let ts = parse_timestamp("2024-06-30T23:59:00+02:00").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-06-30 23:59");
    }

    #[test]
    fn test_records_key_prefers_batch_id() {
        let mut batch: AnalysisBatch = serde_json::from_str(r#"{"id": 12, "batchId": "abc"}"#).unwrap();
        assert_eq!(batch.records_key(), "abc");
        batch.batch_id = Some(" ".to_string());
        assert_eq!(batch.records_key(), "12");
        batch.batch_id = None;
        assert_eq!(batch.records_key(), "12");
        assert_eq!(batch.display_id(), "#12");
    }

    #[test]
    fn test_decode_financial_record() {
        let json = r#"{
            "id": 99, "period": "Q1-2023", "totalRevenue": 120000.50,
            "totalExpenses": 95000, "profitMargin": 0.2083,
            "technologyCosts": null, "batchId": "abc"
        }"#;
        let record: FinancialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.period, "Q1-2023");
        assert_eq!(record.total_revenue, 120000.50);
        assert_eq!(record.total_expenses, 95000.0);
        assert_eq!(record.profit_margin, Some(0.2083));
        assert_eq!(record.technology_costs, None);
    }
}
