//! Persisted auth artifacts: access token, refresh token, cached user.
//!
//! DESIGN
//! ======
//! The three keys are written and cleared together. A failed write clears
//! everything so readers never observe a half-written session, and `read`
//! only returns a user while an access token is present.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use super::storage::{KeyValueStorage, StorageError};
use crate::net::types::{AuthTokens, User};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a new session, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure; all keys are cleared before returning.
    pub fn write(&self, tokens: &AuthTokens, user: &User) -> Result<(), StorageError> {
        let record = serde_json::to_string(user)
            .map_err(|e| StorageError::Serialize {
                key: USER_KEY.to_owned(),
                reason: e.to_string(),
            })?;
        let result = self
            .storage
            .set_item(ACCESS_TOKEN_KEY, &tokens.access_token)
            .and_then(|()| self.storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh_token))
            .and_then(|()| self.storage.set_item(USER_KEY, &record));
        if result.is_err() {
            self.clear();
        }
        result
    }

    /// The cached user, if a token is present and the record parses.
    pub fn read(&self) -> Option<User> {
        if !self.has_token() {
            return None;
        }
        let raw = self.storage.get_item(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn clear(&self) {
        self.storage.remove_item(ACCESS_TOKEN_KEY);
        self.storage.remove_item(REFRESH_TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }

    pub fn has_token(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get_item(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }
}
