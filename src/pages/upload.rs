use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::ANALYSIS_PATH;
use crate::components::upload_form::DatasetUploadForm;
use crate::handoff::{ResultHandoff, UploadResult};

#[component]
pub fn UploadPage() -> impl IntoView {
    let handoff = expect_context::<ResultHandoff>();
    let (uploaded, set_uploaded) = signal(false);

    let on_success = Callback::new(move |result: UploadResult| {
        handoff.deliver(result);
        set_uploaded.set(true);
    });

    // Show the fresh result as soon as it has been handed over
    let navigate = use_navigate();
    Effect::new(move |_| {
        if uploaded.get() {
            navigate(ANALYSIS_PATH, Default::default());
        }
    });

    view! {
        <div class="page upload-page">
            <h2>"Upload Data"</h2>

            <div class="card">
                <h3>"Supported Formats"</h3>
                <div class="format-list">
                    <span class="format-item">
                        <span class="format-tag format-csv">"CSV"</span>
                        "CSV Files (.csv)"
                    </span>
                    <span class="format-item">
                        <span class="format-tag format-xls">"XLS"</span>
                        "Excel Files (.xlsx, .xls)"
                    </span>
                </div>
            </div>

            <DatasetUploadForm on_success=on_success />
        </div>
    }
}
