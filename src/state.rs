//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for the advisor upstream and the
//! upstream base URL; there is no per-request or per-user state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_url: Arc<str>,
}

impl AppState {
    /// Build state with an upstream client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, upstream_url: Arc::from(config.upstream_url.as_str()) })
    }

    /// Full URL of the upstream `/ask` endpoint.
    #[must_use]
    pub fn ask_url(&self) -> String {
        format!("{}{}", self.upstream_url, advice::ASK_PATH)
    }
}
