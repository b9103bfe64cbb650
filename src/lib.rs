pub mod api;
mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod model;
pub mod pages;
pub mod state;

use app::App;
use config::ApiConfig;

pub fn run() {
    let config = ApiConfig::load();
    logging::init(&config.log_filter);
    tracing::info!("Using analysis service at {}", config.base_url);

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config /> });
}
