use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpAnalysisClient;
use crate::components::risk_badge::RiskBadge;
use crate::config::ApiConfig;
use crate::state::guard::RequestGuard;
use crate::state::reports::{load_reports, reports_hint, ReportRow, NO_DATASETS};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let guard = RequestGuard::new();
    let (rows, set_rows) = signal::<Vec<ReportRow>>(vec![]);

    // Load history on mount
    {
        let guard = guard.clone();
        spawn_local(async move {
            let client = HttpAnalysisClient::new(config);
            if let Some(loaded) = guard.run(load_reports(&client)).await {
                set_rows.set(loaded);
            }
        });
    }
    on_cleanup(move || guard.retire());

    view! {
        <div class="page reports-page">
            <h2>"Reports"</h2>

            <section class="card table-card">
                <h3 class="card-header">"Uploaded Datasets"</h3>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        view! { <p class="empty-state">{NO_DATASETS}</p> }.into_any()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Batch ID"</th>
                                        <th>"Date Uploaded"</th>
                                        <th>"Risk Level"</th>
                                        <th>"Status"</th>
                                        <th class="col-actions">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || rows.clone()
                                        key=|row| row.id
                                        children=move |row| {
                                            view! {
                                                <tr>
                                                    <td class="mono">{row.id_label}</td>
                                                    <td>{row.uploaded}</td>
                                                    <td><RiskBadge level=row.risk_level /></td>
                                                    <td>
                                                        <span class="status-dot"></span>
                                                        {row.status}
                                                    </td>
                                                    <td class="col-actions">
                                                        <button
                                                            class="btn btn-small btn-link"
                                                            disabled=true
                                                            title="Export is not available yet"
                                                        >
                                                            "Export"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </section>

            <section class="card">
                <h3 class="card-header">"Risk Analysis Reports"</h3>
                <p class="empty-state">{move || rows.with(|r| reports_hint(r))}</p>
            </section>
        </div>
    }
}
