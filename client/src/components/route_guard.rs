//! Gate for pages that require a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Renders `children` only for a signed-in user.
///
/// While the session is still resolving a neutral placeholder is shown and
/// no navigation happens; once it settles without a user the visitor is
/// sent to `/login`.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, move |path, options| navigate(path, options));

    let decision = Memo::new(move |_| guard_decision(&auth.get()));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <div class="route-guard__spinner" aria-hidden="true"></div>
                        <p>
                            {move || match decision.get() {
                                GuardDecision::Pending => "Loading...",
                                _ => "Redirecting to login...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
