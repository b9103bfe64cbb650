use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{ANALYSIS_PATH, DASHBOARD_PATH, REPORTS_PATH, UPLOAD_PATH};

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"RiskDash"</h1>
                <p class="sidebar-subtitle">"Financial Risk Analysis"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <A href=DASHBOARD_PATH exact=true attr:class="nav-link">"Dashboard"</A>
                </li>
                <li class="nav-item">
                    <A href=UPLOAD_PATH attr:class="nav-link">"Upload Data"</A>
                </li>
                <li class="nav-item">
                    <A href=ANALYSIS_PATH attr:class="nav-link">"Risk Analysis"</A>
                </li>
                <li class="nav-item">
                    <A href=REPORTS_PATH attr:class="nav-link">"Reports"</A>
                </li>
            </ul>
        </nav>
    }
}
