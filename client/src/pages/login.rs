//! Email + password sign-in, with a hand-off to the backend's Google SSO.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::toast::show_toast;
use crate::config::ApiConfig;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::validation::{FormErrors, LoginForm};

pub const GOOGLE_SSO_PATH: &str = "/v1/auth/google";

/// Where the "Continue with Google" button sends the browser.
pub fn google_sso_url(config: &ApiConfig) -> String {
    config.url(GOOGLE_SSO_PATH)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match form.get_untracked().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&credentials).await {
                Ok(_) => {
                    show_toast(toasts, ToastKind::Success, "Welcome back!");
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => show_toast(toasts, ToastKind::Error, e.message()),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Sign In - MentWel"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue your mental wellness journey"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    {move || errors.get().get("email").map(|m| view! { <p class="field-error">{m}</p> })}

                    <label for="password">"Password"</label>
                    <div class="auth-form__password">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__reveal"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || errors.get().get("password").map(|m| view! { <p class="field-error">{m}</p> })}

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="auth-card__divider"><span>"or"</span></div>
                <a class="btn btn--ghost auth-card__sso" href=google_sso_url(&ApiConfig::from_build_env()) rel="external">
                    "Continue with Google"
                </a>

                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
