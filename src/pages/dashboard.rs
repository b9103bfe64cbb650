use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpAnalysisClient;
use crate::components::risk_badge::RiskBadge;
use crate::components::stat_card::StatCard;
use crate::config::ApiConfig;
use crate::model::{format_date, RiskLevel};
use crate::state::dashboard::{load_dashboard, DashboardSummary};
use crate::state::guard::RequestGuard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let guard = RequestGuard::new();
    let (summary, set_summary) = signal(DashboardSummary::default());

    // Load history once on mount
    {
        let guard = guard.clone();
        spawn_local(async move {
            let client = HttpAnalysisClient::new(config);
            if let Some(loaded) = guard.run(load_dashboard(&client)).await {
                set_summary.set(loaded);
            }
        });
    }
    on_cleanup(move || guard.retire());

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard Overview"</h2>

            {move || {
                let s = summary.get();
                let latest_class = s
                    .latest_risk_level
                    .map(RiskLevel::css_class)
                    .unwrap_or("risk-none");
                view! {
                    <div class="card-grid stats-grid">
                        <StatCard
                            label="Total Datasets"
                            value=s.total_datasets.to_string()
                            note="Approximate: one per analysis"
                        />
                        <StatCard
                            label="Total Analyses"
                            value=s.total_analyses.to_string()
                        />
                        <StatCard
                            label="Latest Risk Level"
                            value=s.latest_risk_label()
                            value_class=latest_class
                        />
                        <StatCard
                            label="Avg Risk Score"
                            value=s.average_risk_score_label()
                            value_class="stat-unavailable"
                            note="Not reported by the analysis service"
                        />
                    </div>
                }
            }}

            <div class="dashboard-columns">
                <section class="card">
                    <h3>"Risk Distribution"</h3>
                    {move || {
                        let s = summary.get();
                        if s.is_empty() {
                            return view! { <p class="empty-state">"No analyses yet"</p> }.into_any();
                        }
                        let total = s.total_analyses;
                        s.distribution
                            .into_iter()
                            .filter(|&(level, count)| level != RiskLevel::Unknown || count > 0)
                            .map(|(level, count)| {
                                let width = format!("width: {:.0}%", count as f64 * 100.0 / total as f64);
                                view! {
                                    <div class="distribution-row">
                                        <RiskBadge level=level />
                                        <div class="distribution-track">
                                            <div class=format!("distribution-bar {}", level.css_class()) style=width></div>
                                        </div>
                                        <span class="distribution-count">{count}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </section>

                <section class="card">
                    <h3>"Recent Uploads"</h3>
                    {move || {
                        let recent = summary.get().recent;
                        if recent.is_empty() {
                            view! { <p class="empty-state">"No uploads yet"</p> }.into_any()
                        } else {
                            view! {
                                <div class="recent-list">
                                    {recent.into_iter().map(|batch| view! {
                                        <div class="recent-item">
                                            <div>
                                                <p class="recent-title">{format!("Batch {}", batch.display_id())}</p>
                                                <p class="recent-date">{format_date(batch.analyzed_at)}</p>
                                            </div>
                                            <span class="recent-status">"Completed"</span>
                                        </div>
                                    }).collect::<Vec<_>>()}
                                </div>
                            }.into_any()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
