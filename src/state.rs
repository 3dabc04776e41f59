//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the host configuration and one pooled `reqwest::Client` for the
//! `/api` proxy.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
#[error("failed to build proxy http client: {0}")]
pub struct HttpClientBuildError(String);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, HttpClientBuildError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HttpClientBuildError(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
