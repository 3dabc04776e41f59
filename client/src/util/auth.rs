//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical unauthenticated redirect behavior. The
//! decision waits for the mount check to settle so a reload never bounces a
//! signed-in user to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// What a guarded route should render for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still resolving; show a placeholder and do not navigate.
    Pending,
    Redirect(&'static str),
    Allow,
}

pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.user.is_none() {
        GuardDecision::Redirect(LOGIN_PATH)
    } else {
        GuardDecision::Allow
    }
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    matches!(guard_decision(state), GuardDecision::Redirect(_))
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard_decision(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
