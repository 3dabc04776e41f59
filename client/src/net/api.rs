//! HTTP layer shared by every REST wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves paths against `ApiConfig`, attaches the stored access token to
//! authorized requests, and clears the token store when an authorized
//! request comes back 401. Page code sees that as `ApiError::Unauthorized`
//! and hands it to `Session::invalidate`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` with a display-ready message; transport
//! details are logged, not surfaced.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use super::types::parse_payload;
use crate::config::ApiConfig;
use crate::util::storage::KeyValueStorage;
use crate::util::token_store::TokenStore;

pub const REQUEST_FAILED: &str = "Request failed";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

#[derive(Clone, Debug)]
pub struct ApiClient<S, T> {
    config: ApiConfig,
    store: TokenStore<S>,
    transport: T,
}

impl<S: KeyValueStorage, T: Transport> ApiClient<S, T> {
    pub fn new(config: ApiConfig, store: TokenStore<S>, transport: T) -> Self {
        Self { config, store, transport }
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// A request for `path` under the configured base URL.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.url(path))
    }

    /// Send without credentials or interception.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.transport.send(request).await
    }

    /// Send with the stored bearer token. Non-2xx responses become errors; a
    /// 401 also clears the token store.
    pub async fn authorized(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let Some(token) = self.store.access_token() else {
            return Err(ApiError::Unauthorized(SESSION_EXPIRED.to_owned()));
        };
        let response = self.send(request.with_bearer(token)).await.map_err(|e| {
            leptos::logging::warn!("api request failed: {e}");
            ApiError::Network(REQUEST_FAILED.to_owned())
        })?;
        if response.status == 401 {
            self.store.clear();
            let message = response
                .message()
                .unwrap_or_else(|| SESSION_EXPIRED.to_owned());
            return Err(ApiError::Unauthorized(message));
        }
        if !response.is_success() {
            return Err(ApiError::from_response(&response, REQUEST_FAILED));
        }
        Ok(response)
    }

    pub async fn get_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.authorized(request).await?;
        decode(&response)
    }

    pub async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = self.request(method, path).with_body(json_body(body)?);
        let response = self.authorized(request).await?;
        decode(&response)
    }

    /// Authorized request whose response body is ignored.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.authorized(request).await.map(|_| ())
    }
}

pub(crate) fn json_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        leptos::logging::error!("request body serialization failed: {e}");
        ApiError::Server(REQUEST_FAILED.to_owned())
    })
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    parse_payload(&response.body).map_err(|e| {
        leptos::logging::warn!("unexpected response payload: {e}");
        ApiError::Server(REQUEST_FAILED.to_owned())
    })
}
