use leptos::prelude::*;

use crate::model::RiskLevel;

/// Pill showing a risk level, coloured by severity.
#[component]
pub fn RiskBadge(
    level: RiskLevel,
    /// Larger variant used in summary panels
    #[prop(default = false)]
    large: bool,
) -> impl IntoView {
    let size = if large { "risk-badge-large" } else { "risk-badge-small" };
    let class = format!("risk-badge {} {}", size, level.css_class());

    view! { <span class=class>{level.label()}</span> }
}
