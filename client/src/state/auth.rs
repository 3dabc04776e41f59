//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `Session` owns the transitions; the view
//! layer mirrors the latest snapshot into an `RwSignal<AuthState>`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, loading status, and the
/// last failure message.
///
/// `loading` is only true while the mount check or a login/register call is
/// in flight. `error` is cleared whenever a new attempt begins.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Coarse lifecycle derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Anonymous,
    Authenticated,
}

impl Default for AuthState {
    /// Nothing is known until the mount check has run.
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    pub fn phase(&self) -> SessionPhase {
        match (self.loading, &self.user) {
            (true, _) => SessionPhase::Initializing,
            (false, None) => SessionPhase::Anonymous,
            (false, Some(_)) => SessionPhase::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// A login/register/SSO attempt started.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Result of the mount check.
    pub fn settle(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn succeed(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.user = None;
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
    }
}
