use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::{AnalysisService, DatasetFile, HttpAnalysisClient};
use crate::config::ApiConfig;
use crate::handoff::UploadResult;
use crate::state::guard::RequestGuard;
use crate::state::upload::{UploadForm, ACCEPTED_FORMATS};

/// File picker plus submit button for a financial dataset.
#[component]
pub fn DatasetUploadForm(
    /// Invoked with the analysis once the upload succeeds
    on_success: Callback<UploadResult>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let form = RwSignal::new(UploadForm::new());
    let (is_reading, set_is_reading) = signal(false);
    let guard = RequestGuard::new();

    let read_guard = guard.clone();
    let on_file_change = move |ev: web_sys::Event| {
        let Some(file) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            // Picker cancelled: drop any pending read and the old selection
            read_guard.issue();
            set_is_reading.set(false);
            form.update(|f| f.clear_file());
            return;
        };

        set_is_reading.set(true);
        let guard = read_guard.clone();
        spawn_local(async move {
            if let Some(read) = guard.run(DatasetFile::read(file)).await {
                match read {
                    Ok(dataset) => form.update(|f| f.select_file(dataset)),
                    Err(e) => form.update(|f| f.read_failed(&e)),
                }
                set_is_reading.set(false);
            }
        });
    };

    let submit_guard = guard.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let guard = submit_guard.clone();
        let client = HttpAnalysisClient::new(config.clone());
        spawn_local(async move {
            if let Some(outcome) = guard.run(client.submit_dataset(file)).await {
                if let Some(result) = form.try_update(|f| f.complete(outcome)).flatten() {
                    on_success.run(result);
                }
            }
        });
    };

    on_cleanup(move || guard.retire());

    view! {
        <form class="card upload-form" on:submit=on_submit>
            <h3>"Upload Financial Data"</h3>

            <div class="file-drop">
                <input
                    type="file"
                    accept=ACCEPTED_FORMATS
                    on:change=on_file_change
                    disabled=move || form.with(|f| f.is_submitting())
                />
                <p class="file-hint">"Supported formats: CSV, XLSX, XLS"</p>
                {move || {
                    form.with(|f| f.file_name().map(str::to_string)).map(|name| {
                        view! { <p class="file-selected">{format!("Selected: {}", name)}</p> }
                    })
                }}
            </div>

            {move || {
                form.with(|f| f.error().map(str::to_string)).map(|msg| {
                    view! { <div class="upload-error">{msg}</div> }
                })
            }}

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || is_reading.get() || !form.with(|f| f.can_submit())
            >
                {move || form.with(|f| f.submit_label())}
            </button>
        </form>
    }
}
