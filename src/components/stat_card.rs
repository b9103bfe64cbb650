use leptos::prelude::*;

/// One summary figure on the dashboard.
#[component]
pub fn StatCard(
    /// Caption under the value, e.g. "Total Datasets"
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Extra class for the value, e.g. a risk colour
    #[prop(optional, into)]
    value_class: String,
    /// Small print under the caption
    #[prop(optional, into)]
    note: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <p class=format!("stat-value {}", value_class)>{value}</p>
            <p class="stat-label">{label}</p>
            {note.map(|n| view! { <p class="stat-note">{n}</p> })}
        </div>
    }
}
