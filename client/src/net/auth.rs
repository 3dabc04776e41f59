//! Auth client: login, register, logout, SSO completion, local session reads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only network boundary for authentication. Successful calls replace
//! the persisted session in `TokenStore`; failures are normalized into
//! `ApiError` with the backend message or a per-operation fallback. Nothing
//! is retried here; retry is a user action.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, json_body};
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{
    AuthPayload, AuthTokens, Credentials, Envelope, RegistrationRequest, User, UserRecord,
    parse_payload,
};
use crate::util::storage::KeyValueStorage;
use crate::util::token_store::TokenStore;

pub const LOGIN_PATH: &str = "/v1/auth/login";
pub const REGISTER_PATH: &str = "/v1/auth/register";
pub const LOGOUT_PATH: &str = "/v1/auth/logout";
pub const ME_PATH: &str = "/v1/auth/me";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const SSO_FAILED: &str = "Sign-in failed";

#[derive(Clone, Debug)]
pub struct AuthClient<S, T> {
    api: ApiClient<S, T>,
}

impl<S: KeyValueStorage, T: Transport> AuthClient<S, T> {
    pub fn new(api: ApiClient<S, T>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<S, T> {
        &self.api
    }

    pub fn store(&self) -> &TokenStore<S> {
        self.api.store()
    }

    /// `POST /v1/auth/login`; persists and returns the user on success.
    ///
    /// # Errors
    ///
    /// Returns the backend message, or `"Login failed"` when there is none.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let request = self.api.request(Method::Post, LOGIN_PATH).with_body(json_body(credentials)?);
        self.authenticate(request, LOGIN_FAILED).await
    }

    /// `POST /v1/auth/register`; same contract as [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns the backend message, or `"Registration failed"` when there is none.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<User, ApiError> {
        let request = self.api.request(Method::Post, REGISTER_PATH).with_body(json_body(request)?);
        self.authenticate(request, REGISTRATION_FAILED).await
    }

    /// End the local session, telling the backend when a refresh token exists.
    ///
    /// Server failures are logged and swallowed; the token store is always cleared.
    pub async fn logout(&self) {
        if let Some(refresh_token) = self.store().refresh_token() {
            let request = self
                .api
                .request(Method::Post, LOGOUT_PATH)
                .with_body(serde_json::json!({ "refreshToken": refresh_token }));
            match self.api.send(request).await {
                Ok(response) if !response.is_success() => {
                    leptos::logging::warn!("logout rejected by server: status {}", response.status);
                }
                Ok(_) => {}
                Err(e) => leptos::logging::warn!("logout request failed: {e}"),
            }
        }
        self.store().clear();
    }

    /// Resolve the user behind freshly issued SSO tokens via `GET /v1/auth/me`
    /// and persist both.
    ///
    /// # Errors
    ///
    /// Returns the backend message, or `"Sign-in failed"` when there is none.
    pub async fn complete_sso(&self, tokens: AuthTokens) -> Result<User, ApiError> {
        let request = self
            .api
            .request(Method::Get, ME_PATH)
            .with_bearer(tokens.access_token.clone());
        let response = self.exchange(request, SSO_FAILED).await?;
        if !response.is_success() {
            return Err(ApiError::from_response(&response, SSO_FAILED));
        }
        let user: User = parse_payload::<UserRecord>(&response.body)
            .map_err(|_| ApiError::Server(SSO_FAILED.to_owned()))?
            .into();
        self.persist(&tokens, user)
    }

    /// The cached user; no network round-trip.
    pub fn current_user(&self) -> Option<User> {
        self.store().read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store().has_token()
    }

    async fn authenticate(&self, request: ApiRequest, fallback: &str) -> Result<User, ApiError> {
        let response = self.exchange(request, fallback).await?;
        let payload = parse_auth_response(&response, fallback)?;
        let tokens = AuthTokens::from(payload.tokens);
        self.persist(&tokens, payload.user)
    }

    async fn exchange(&self, request: ApiRequest, fallback: &str) -> Result<ApiResponse, ApiError> {
        self.api.send(request).await.map_err(|e| {
            leptos::logging::warn!("{fallback}: {e}");
            ApiError::Network(fallback.to_owned())
        })
    }

    fn persist(&self, tokens: &AuthTokens, user: User) -> Result<User, ApiError> {
        self.store().write(tokens, &user).map_err(|e| {
            leptos::logging::error!("could not persist session: {e}");
            ApiError::Storage("Unable to save your session on this device".to_owned())
        })?;
        Ok(user)
    }
}

/// Extract `{ user, tokens }` from a login/register response.
pub(crate) fn parse_auth_response(
    response: &ApiResponse,
    fallback: &str,
) -> Result<AuthPayload, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_response(response, fallback));
    }
    let envelope: Envelope<AuthPayload> =
        response.json().map_err(|_| ApiError::Server(fallback.to_owned()))?;
    match envelope {
        Envelope { success: true, data: Some(payload), .. } => Ok(payload),
        Envelope { message, .. } => Err(ApiError::from_status(response.status, message, fallback)),
    }
}
