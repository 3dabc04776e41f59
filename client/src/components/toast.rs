//! Toast stack and the helper pages use to raise toasts.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast; in the browser it dismisses itself after a few seconds.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut pushed = None;
    toasts.update(|state| pushed = state.push(kind, message));

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = pushed {
            let ttl =
                std::time::Duration::from_millis(u64::from(crate::state::toast::TOAST_TTL_MS));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(ttl).await;
                toasts.try_update(|state| state.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = pushed;
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class()>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
