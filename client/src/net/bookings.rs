//! Therapy-session (appointment) booking endpoints.
//!
//! Every call is authorized; a 401 clears the token store inside `ApiClient`
//! and surfaces as `ApiError::Unauthorized` for the page to hand to the
//! session manager.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use serde_json::json;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{Method, Transport};
use super::types::{CreateSessionData, TherapySession};
use crate::util::storage::KeyValueStorage;

fn session_endpoint(id: &str) -> String {
    format!("/sessions/{id}")
}

pub async fn list_sessions<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
) -> Result<Vec<TherapySession>, ApiError> {
    api.get_json(api.request(Method::Get, "/sessions")).await
}

pub async fn fetch_session<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    id: &str,
) -> Result<TherapySession, ApiError> {
    api.get_json(api.request(Method::Get, &session_endpoint(id))).await
}

pub async fn create_session<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    data: &CreateSessionData,
) -> Result<TherapySession, ApiError> {
    api.send_json(Method::Post, "/sessions", data).await
}

/// The response body is ignored; any 2xx, including an empty 204, succeeds.
pub async fn cancel_session<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    id: &str,
) -> Result<(), ApiError> {
    let path = format!("{}/cancel", session_endpoint(id));
    api.execute(api.request(Method::Patch, &path).with_body(json!({}))).await
}

/// Mark a session complete; blank notes are sent as absent. The response
/// body is ignored.
pub async fn complete_session<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    id: &str,
    notes: Option<&str>,
) -> Result<(), ApiError> {
    let path = format!("{}/complete", session_endpoint(id));
    let body = match notes.map(str::trim).filter(|n| !n.is_empty()) {
        Some(notes) => json!({ "notes": notes }),
        None => json!({}),
    };
    api.execute(api.request(Method::Patch, &path).with_body(body)).await
}
