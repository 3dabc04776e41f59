//! Normalized API failures.
//!
//! ERROR HANDLING
//! ==============
//! Every failure shape (no response, 4xx, 5xx, `success: false`, unparseable
//! body) collapses into one `ApiError` whose `Display` is the message shown
//! to the user. The variant only records where it came from.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::transport::ApiResponse;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("{0}")]
    Network(String),
    /// The backend rejected the input (4xx other than 401/403).
    #[error("{0}")]
    Validation(String),
    /// Bad credentials or an expired session (401/403).
    #[error("{0}")]
    Unauthorized(String),
    /// 5xx, or a 2xx whose payload was not a success.
    #[error("{0}")]
    Server(String),
    /// The session could not be saved locally.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Classify a completed response by status, preferring the backend's message.
    pub fn from_status(status: u16, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        match status {
            401 | 403 => Self::Unauthorized(message),
            400..=499 => Self::Validation(message),
            _ => Self::Server(message),
        }
    }

    pub fn from_response(response: &ApiResponse, fallback: &str) -> Self {
        Self::from_status(response.status, response.message(), fallback)
    }

    /// The display-ready message.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(m)
            | Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Server(m)
            | Self::Storage(m) => m,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
