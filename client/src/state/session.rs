//! Process-wide auth session with subscribe/notify.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application root builds one `Session`, provides it through Leptos
//! context, and mirrors every notification into an `RwSignal<AuthState>`.
//! Pages call `login`/`register`/`complete_sso`/`logout` on it and hand
//! `ApiError::Unauthorized` results from data calls to `invalidate`.
//!
//! DESIGN
//! ======
//! Operations are not queued or cancelled. Each transition is applied when
//! its future resolves, so with overlapping calls the one that resolves last
//! wins. Components that go away drop their `Subscription`, which keeps a
//! late resolution from reaching torn-down views.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::auth::AuthState;
use crate::net::auth::AuthClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{AuthTokens, Credentials, RegistrationRequest, User};
use crate::util::storage::KeyValueStorage;

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle returned by [`Session::subscribe`]; dropping it unsubscribes.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish_non_exhaustive()
    }
}

struct Inner<S, T> {
    client: AuthClient<S, T>,
    state: Mutex<AuthState>,
    registry: Arc<Mutex<Registry>>,
    checked: AtomicBool,
}

/// Shared handle to the auth session. Clones refer to the same session.
pub struct Session<S, T> {
    inner: Arc<Inner<S, T>>,
}

impl<S, T> Clone for Session<S, T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: KeyValueStorage, T: Transport> Session<S, T> {
    pub fn new(client: AuthClient<S, T>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                state: Mutex::new(AuthState::default()),
                registry: Arc::default(),
                checked: AtomicBool::new(false),
            }),
        }
    }

    pub fn client(&self) -> &AuthClient<S, T> {
        &self.inner.client
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Call `listener` after every transition until the returned handle is dropped.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.inner.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription { registry: Arc::downgrade(&self.inner.registry), id }
    }

    /// Resolve the persisted session once; later calls do nothing.
    pub fn check(&self) {
        if self.inner.checked.swap(true, Ordering::AcqRel) {
            return;
        }
        let user = self.inner.client.current_user();
        let outcome = if user.is_some() { "signed in" } else { "anonymous" };
        leptos::logging::log!("session check: {outcome}");
        self.update(|state| state.settle(user));
    }

    /// # Errors
    ///
    /// Returns the failure after recording its message in the state.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.update(AuthState::begin);
        let result = self.inner.client.login(credentials).await;
        self.finish(result)
    }

    /// # Errors
    ///
    /// Returns the failure after recording its message in the state.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<User, ApiError> {
        self.update(AuthState::begin);
        let result = self.inner.client.register(request).await;
        self.finish(result)
    }

    /// # Errors
    ///
    /// Returns the failure after recording its message in the state.
    pub async fn complete_sso(&self, tokens: AuthTokens) -> Result<User, ApiError> {
        self.update(AuthState::begin);
        let result = self.inner.client.complete_sso(tokens).await;
        self.finish(result)
    }

    /// Always ends anonymous, whatever the server says.
    pub async fn logout(&self) {
        self.inner.client.logout().await;
        self.update(AuthState::sign_out);
    }

    /// An authorized call was rejected; drop the local session and surface `message`.
    pub fn invalidate(&self, message: &str) {
        self.inner.client.store().clear();
        self.update(|state| state.fail(message));
    }

    /// End the session if `err` means the token was revoked.
    ///
    /// The API layer clears the store only on 401, so an `Unauthorized` that
    /// leaves a token behind (403) is a permission failure, not a sign-out.
    /// Returns whether the session was ended.
    pub fn end_if_revoked(&self, err: &ApiError) -> bool {
        if !err.is_unauthorized() || self.inner.client.is_authenticated() {
            return false;
        }
        self.invalidate(err.message());
        true
    }

    fn finish(&self, result: Result<User, ApiError>) -> Result<User, ApiError> {
        match &result {
            Ok(user) => {
                let user = user.clone();
                self.update(|state| state.succeed(user));
            }
            Err(e) => {
                let message = e.message().to_owned();
                self.update(|state| state.fail(message));
            }
        }
        result
    }

    fn update(&self, apply: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.inner.state.lock().unwrap_or_else(PoisonError::into_inner);
            apply(&mut state);
            state.clone()
        };
        let listeners: Vec<Listener> = self
            .inner
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
