use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::ApiConfig;
use crate::handoff::ResultHandoff;
use crate::pages::dashboard::DashboardPage;
use crate::pages::reports::ReportsPage;
use crate::pages::risk_analysis::RiskAnalysisPage;
use crate::pages::upload::UploadPage;

pub const DASHBOARD_PATH: &str = "/";
pub const UPLOAD_PATH: &str = "/upload";
pub const ANALYSIS_PATH: &str = "/analysis";
pub const REPORTS_PATH: &str = "/reports";

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_context(config);
    provide_context(ResultHandoff::new());

    view! {
        <Router>
            <HandoffReset />
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <Redirect path=DASHBOARD_PATH /> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/upload") view=UploadPage />
                        <Route path=path!("/analysis") view=RiskAnalysisPage />
                        <Route path=path!("/reports") view=ReportsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Drops an unread upload result once the user goes anywhere but the
/// Analysis page.
#[component]
fn HandoffReset() -> impl IntoView {
    let handoff = expect_context::<ResultHandoff>();
    let location = use_location();

    Effect::new(move |_| {
        if location.pathname.get() != ANALYSIS_PATH {
            handoff.discard();
        }
    });
}
