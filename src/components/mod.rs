pub mod records_chart;
pub mod risk_badge;
pub mod sidebar;
pub mod stat_card;
pub mod upload_form;
