//! Risk analysis page.
//!
//! Shows the analysis handed over by the Upload page, or the newest one
//! from history when the page is opened directly.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpAnalysisClient;
use crate::components::records_chart::RecordsChart;
use crate::components::risk_badge::RiskBadge;
use crate::config::ApiConfig;
use crate::handoff::ResultHandoff;
use crate::model::{format_date, AnalysisBatch};
use crate::state::analysis::{select_analysis, AnalysisSelection, InsightList, Insights};
use crate::state::guard::RequestGuard;

#[component]
pub fn RiskAnalysisPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let pending = expect_context::<ResultHandoff>().take();
    let guard = RequestGuard::new();
    // None while the selection is being resolved
    let (selection, set_selection) = signal::<Option<AnalysisSelection>>(None);

    {
        let guard = guard.clone();
        spawn_local(async move {
            let client = HttpAnalysisClient::new(config);
            if let Some(selected) = guard.run(select_analysis(pending, &client)).await {
                set_selection.set(Some(selected));
            }
        });
    }
    on_cleanup(move || guard.retire());

    view! {
        <div class="page risk-analysis-page">
            {move || match selection.get() {
                None => view! {
                    <div class="loading-indicator">
                        <div class="spinner"></div>
                        <p>"Loading analysis..."</p>
                    </div>
                }.into_any(),
                Some(AnalysisSelection::Empty) => view! {
                    <div class="empty-panel">
                        <h3>"No risk analyses available yet."</h3>
                        <p>"Upload a dataset to generate your first analysis."</p>
                    </div>
                }.into_any(),
                Some(AnalysisSelection::FromUpload(batch) | AnalysisSelection::Latest(batch)) => {
                    view! { <AnalysisDetail batch=batch /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn AnalysisDetail(batch: AnalysisBatch) -> impl IntoView {
    let insights = Insights::for_batch(&batch);

    view! {
        <h2>"Risk Analysis"</h2>
        <div class="analysis-layout">
            <div class="analysis-main">
                <section class="card">
                    <h3>"Financial Trends"</h3>
                    <p class="section-description">"Revenue and Expense analysis over time"</p>
                    <RecordsChart batch_key=batch.records_key() />
                </section>

                <section class="card">
                    <h3>"Analysis Insights"</h3>
                    <h4 class="insight-heading">"Risk Factors"</h4>
                    <InsightItems list=insights.risk_factors item_class="insight-risk" />
                    <h4 class="insight-heading">"Recommendations"</h4>
                    <InsightItems list=insights.recommendations item_class="insight-recommendation" />
                </section>
            </div>

            <aside class="card analysis-summary">
                <h3>"Analysis Summary"</h3>
                <p class="summary-label">"Risk Level"</p>
                <RiskBadge level=batch.risk_level large=true />
                <p class="summary-label">"Batch ID"</p>
                <p class="mono">{batch.records_key()}</p>
                <p class="summary-label">"Analyzed Date"</p>
                <p>{format_date(batch.analyzed_at)}</p>
            </aside>
        </div>
    }
}

#[component]
fn InsightItems(list: InsightList, #[prop(into)] item_class: String) -> impl IntoView {
    match list {
        InsightList::Items(items) => view! {
            <ul class="insight-list">
                {items.into_iter().map(|item| {
                    view! { <li class=format!("insight-item {}", item_class)>{item}</li> }
                }).collect::<Vec<_>>()}
            </ul>
        }.into_any(),
        InsightList::Fallback(message) => view! {
            <p class="insight-empty">{message}</p>
        }.into_any(),
    }
}
