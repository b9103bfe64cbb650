//! `tracing` output for the browser.
//!
//! Events go to the devtools console through `tracing-wasm`, filtered by
//! the configured `EnvFilter` directives.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

use crate::config::DEFAULT_LOG_FILTER;

/// Parse the filter directives. An invalid filter falls back to the default.
pub fn parse_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Most verbose level the filter can let through.
pub fn max_level(filter: &EnvFilter) -> Level {
    filter
        .max_level_hint()
        .and_then(LevelFilter::into_level)
        .unwrap_or(Level::TRACE)
}

/// Install the global subscriber and the panic hook.
pub fn init(filter: &str) {
    console_error_panic_hook::set_once();

    let filter = parse_filter(filter);
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level(&filter))
        .set_report_logs_in_timings(false)
        .build();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(WASMLayer::new(config))
        .try_init();
}
