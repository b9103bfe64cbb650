pub mod dashboard;
pub mod reports;
pub mod risk_analysis;
pub mod upload;
