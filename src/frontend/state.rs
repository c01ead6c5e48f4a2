//! Frontend server state

use std::time::Duration;

use crate::config::FrontendSection;
use crate::error::Result;

/// Shared state for the frontend: one reused HTTP client and the upstream
/// base URL.
#[derive(Clone)]
pub struct AppState {
    /// Client for requests to the backend
    pub client: reqwest::Client,

    /// Backend base URL, no trailing slash
    pub backend_base: String,
}

impl AppState {
    /// Build state from the frontend config section.
    pub fn from_config(config: &FrontendSection) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            backend_base: config.backend_base(),
        })
    }

    /// Full URL of the upstream greeting route.
    pub fn hello_url(&self) -> String {
        format!("{}/v1/hello", self.backend_base)
    }
}
