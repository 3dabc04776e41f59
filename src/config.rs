//! Host configuration from the process environment.
//!
//! DESIGN
//! ======
//! Every key has a default so `cargo leptos watch` works with no `.env`.
//! A key that is set but malformed is an error rather than a silent
//! fallback; a typo in `PORT` should stop startup, not bind elsewhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("BACKEND_URL must start with http:// or https:// (got {0:?})")]
    BackendScheme(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin the `/api` proxy forwards to, without a trailing slash.
    pub backend_url: String,
    pub proxy_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            "PROXY_TIMEOUT_SECS",
            get("PROXY_TIMEOUT_SECS"),
            DEFAULT_PROXY_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "PROXY_TIMEOUT_SECS",
                value: "0".to_owned(),
            });
        }

        let backend_url = get("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::BackendScheme(backend_url));
        }

        Ok(Self {
            port,
            backend_url: backend_url.trim_end_matches('/').to_owned(),
            proxy_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
