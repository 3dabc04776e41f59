//! Landing route for the backend's SSO redirect.
//!
//! The backend finishes the provider handshake and redirects here with the
//! issued tokens in the query string. The page resolves the user behind
//! them, then moves on to the dashboard, or back to `/register` on failure.

#[cfg(test)]
#[path = "sso_callback_test.rs"]
mod sso_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppSession;
use crate::components::toast::show_toast;
use crate::net::types::AuthTokens;
use crate::state::toast::{ToastKind, ToastState};

pub const SSO_FAILED_MESSAGE: &str = "Sign-in failed. Please try again.";

/// Both tokens, when present and non-blank.
pub fn tokens_from_query(access: Option<String>, refresh: Option<String>) -> Option<AuthTokens> {
    let access_token = access.filter(|t| !t.trim().is_empty())?;
    let refresh_token = refresh.filter(|t| !t.trim().is_empty())?;
    Some(AuthTokens { access_token, refresh_token })
}

/// The callback URL carries tokens; keep it out of browser history.
fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn SsoCallbackPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Untracked reads: the exchange runs once per visit.
    Effect::new(move || {
        let params = query.get_untracked();
        let tokens = tokens_from_query(params.get("accessToken"), params.get("refreshToken"));
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match tokens {
                Some(tokens) => session
                    .complete_sso(tokens)
                    .await
                    .map(|_| ())
                    .map_err(|e| leptos::logging::warn!("sso completion failed: {e}")),
                None => {
                    leptos::logging::warn!("sso callback without tokens");
                    Err(())
                }
            };
            match outcome {
                Ok(()) => {
                    show_toast(toasts, ToastKind::Success, "Successfully signed in!");
                    navigate("/dashboard", replace_history());
                }
                Err(()) => {
                    show_toast(toasts, ToastKind::Error, SSO_FAILED_MESSAGE);
                    navigate("/register", replace_history());
                }
            }
        });
    });

    view! {
        <div class="sso-callback">
            <div class="route-guard__spinner" aria-hidden="true"></div>
            <h2>"Completing sign-in..."</h2>
            <p>"Please wait while we set up your account."</p>
        </div>
    }
}
