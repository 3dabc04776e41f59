//! Client-side API configuration.
//!
//! The REST base URL is baked in at compile time from `MENTWEL_API_BASE`.
//! The default `/api` is same-origin: the host server forwards it to the
//! backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";

/// Where REST requests are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Config from the `MENTWEL_API_BASE` build-time variable, or `/api`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MENTWEL_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Join `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
