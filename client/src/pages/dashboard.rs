//! Dashboard page listing the signed-in user's therapy sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads bookings once on mount
//! and lets the user cancel scheduled ones. An `Unauthorized` answer ends the
//! session through `report_api_error`, and the route guard takes over.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::{AppSession, report_api_error};
use crate::components::toast::show_toast;
use crate::net::bookings::{cancel_session, list_sessions};
use crate::net::types::{SessionStatus, TherapySession};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

/// Scheduled sessions first (soonest first), then the rest newest first.
pub fn order_sessions(mut sessions: Vec<TherapySession>) -> Vec<TherapySession> {
    sessions.sort_by(|a, b| {
        let a_upcoming = a.status == SessionStatus::Scheduled;
        let b_upcoming = b.status == SessionStatus::Scheduled;
        b_upcoming.cmp(&a_upcoming).then_with(|| {
            if a_upcoming {
                a.scheduled_at.cmp(&b.scheduled_at)
            } else {
                b.scheduled_at.cmp(&a.scheduled_at)
            }
        })
    });
    sessions
}

pub fn status_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Scheduled => "Scheduled",
        SessionStatus::Completed => "Completed",
        SessionStatus::Cancelled => "Cancelled",
    }
}

/// `2026-11-02T10:00:00Z` -> `2026-11-02 10:00`; anything unexpected is shown as-is.
pub fn format_schedule(raw: &str) -> String {
    raw.split_once('T')
        .and_then(|(date, time)| time.get(..5).map(|hhmm| format!("{date} {hhmm}")))
        .unwrap_or_else(|| raw.to_owned())
}

/// Mark the session with `id` cancelled after the backend accepted it.
pub fn mark_cancelled(sessions: &mut [TherapySession], id: &str) {
    if let Some(slot) = sessions.iter_mut().find(|s| s.id == id) {
        slot.status = SessionStatus::Cancelled;
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let sessions = RwSignal::new(Vec::<TherapySession>::new());
    let loading = RwSignal::new(true);

    let load_session = session.clone();
    Effect::new(move || {
        let session = load_session.clone();
        leptos::task::spawn_local(async move {
            match list_sessions(session.client().api()).await {
                Ok(items) => {
                    sessions.try_set(order_sessions(items));
                }
                Err(e) => report_api_error(&session, toasts, &e),
            }
            loading.try_set(false);
        });
    });

    let on_cancel = Callback::new(move |id: String| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match cancel_session(session.client().api(), &id).await {
                Ok(()) => {
                    sessions.try_update(|items| mark_cancelled(items, &id));
                    show_toast(toasts, ToastKind::Success, "Session cancelled");
                }
                Err(e) => report_api_error(&session, toasts, &e),
            }
        });
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|u| u.first_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "there".to_owned())
    };

    view! {
        <Title text="Dashboard - MentWel"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Welcome back, " {greeting} "!"</h1>
                <a href="/therapists" class="btn btn--primary">"Book a Session"</a>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading sessions..."</p> }>
                <Show
                    when=move || !sessions.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="dashboard-page__empty">
                                "No sessions yet. " <a href="/therapists">"Find a therapist"</a> " to get started."
                            </p>
                        }
                    }
                >
                    <ul class="session-list">
                        {move || {
                            sessions
                                .get()
                                .into_iter()
                                .map(|s| {
                                    let id = s.id.clone();
                                    let cancellable = s.status == SessionStatus::Scheduled;
                                    view! {
                                        <li class="session-list__item">
                                            <span class="session-list__when">{format_schedule(&s.scheduled_at)}</span>
                                            <span class="session-list__type">{s.session_type.label()}</span>
                                            <span class="session-list__duration">{format!("{} min", s.duration)}</span>
                                            <span class="session-list__status">{status_label(s.status)}</span>
                                            {cancellable.then(|| {
                                                let id = id.clone();
                                                view! {
                                                    <button class="btn btn--ghost" on:click=move |_| on_cancel.run(id.clone())>
                                                        "Cancel"
                                                    </button>
                                                }
                                            })}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
