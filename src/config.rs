//! Runtime configuration for the dashboard.
//!
//! The API base address can be overridden per deployment with a
//! `<meta name="riskdash-api-url" content="...">` tag in `index.html`,
//! or at build time with the `RISKDASH_API_URL` environment variable.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";
const API_URL_META: &str = "riskdash-api-url";

/// Where the analysis service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve the configuration for the running page.
    pub fn load() -> Self {
        Self::resolve(
            read_meta(API_URL_META),
            option_env!("RISKDASH_API_URL"),
            option_env!("RISKDASH_API_TIMEOUT_SECS"),
            option_env!("RISKDASH_LOG"),
        )
    }

    /// Combine the configuration sources. A page-level override beats the
    /// build-time value, which beats the default. Blank values are ignored.
    pub fn resolve(
        page_url: Option<String>,
        build_url: Option<&str>,
        timeout_secs: Option<&str>,
        log_filter: Option<&str>,
    ) -> Self {
        let base_url = page_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| {
                build_url
                    .filter(|u| !u.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = timeout_secs
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            log_filter,
        }
    }

    /// Join an endpoint path onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Read the `content` of a named `<meta>` tag, if the page has one.
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}
