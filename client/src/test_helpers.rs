//! Shared fixtures and doubles for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::auth::AuthClient;
use crate::net::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::net::types::{AuthTokens, User};
use crate::util::storage::{KeyValueStorage, MemoryStorage, StorageError};
use crate::util::token_store::TokenStore;

/// A user as the backend would return it.
pub fn sample_user() -> User {
    serde_json::from_value(json!({
        "_id": "u-1",
        "email": "a@b.com",
        "firstName": "Ada",
        "lastName": "Obi",
        "role": "client",
        "status": "active",
        "isEmailVerified": true,
        "isPhoneVerified": false
    }))
    .unwrap()
}

pub fn sample_tokens() -> AuthTokens {
    AuthTokens { access_token: "access-1".to_owned(), refresh_token: "refresh-1".to_owned() }
}

/// A successful login/register body carrying `sample_user` and tokens.
pub fn auth_success_body() -> String {
    json!({
        "success": true,
        "data": {
            "user": serde_json::to_value(sample_user()).unwrap(),
            "tokens": {
                "access": { "token": "access-1", "expiresIn": "15m" },
                "refresh": { "token": "refresh-1", "expiresIn": "7d" }
            }
        }
    })
    .to_string()
}

pub fn response(status: u16, body: impl Into<String>) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status, body: body.into() })
}

pub fn offline() -> Result<ApiResponse, TransportError> {
    Err(TransportError("connection refused".to_owned()))
}

/// Replays queued results in order and records every request.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Result<ApiResponse, TransportError>>) -> Self {
        Self { script: Arc::new(Mutex::new(script.into_iter().collect())), sent: Arc::default() }
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

/// Memory storage that refuses writes to one key.
#[derive(Clone, Debug, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub failing_key: &'static str,
}

impl KeyValueStorage for FlakyStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.failing_key {
            return Err(StorageError::WriteFailed { key: key.to_owned() });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

pub fn api_client(
    storage: MemoryStorage,
    transport: ScriptedTransport,
) -> ApiClient<MemoryStorage, ScriptedTransport> {
    ApiClient::new(ApiConfig::new("/api"), TokenStore::new(storage), transport)
}

pub fn auth_client(
    storage: MemoryStorage,
    transport: ScriptedTransport,
) -> AuthClient<MemoryStorage, ScriptedTransport> {
    AuthClient::new(api_client(storage, transport))
}

/// Storage pre-seeded with `sample_tokens` and `sample_user`.
pub fn signed_in_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    TokenStore::new(storage.clone()).write(&sample_tokens(), &sample_user()).unwrap();
    storage
}
