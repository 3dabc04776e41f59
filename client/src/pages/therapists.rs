//! Therapist directory and detail/booking pages.

#[cfg(test)]
#[path = "therapists_test.rs"]
mod therapists_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::{AppSession, report_api_error};
use crate::components::toast::show_toast;
use crate::net::bookings::create_session;
use crate::net::error::ApiError;
use crate::net::therapists::{
    fetch_therapist, filter_therapists, list_therapists, search_therapists,
};
use crate::net::types::{CreateSessionData, SessionType, Therapist, TherapistFilter};
use crate::state::toast::{ToastKind, ToastState};

pub const DURATIONS: [u32; 3] = [30, 50, 60];

/// Which directory endpoint a set of controls maps to.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryQuery {
    All,
    Search(String),
    Filter(TherapistFilter),
}

/// Free-text search wins; otherwise any active filter selects the filter endpoint.
pub fn directory_query(
    search: &str,
    min_rating: Option<f64>,
    available_only: bool,
) -> DirectoryQuery {
    let search = search.trim();
    if !search.is_empty() {
        return DirectoryQuery::Search(search.to_owned());
    }
    if min_rating.is_none() && !available_only {
        return DirectoryQuery::All;
    }
    DirectoryQuery::Filter(TherapistFilter {
        specialization: None,
        min_rating,
        availability: available_only.then_some(true),
    })
}

/// Validate booking inputs into a request body.
///
/// # Errors
///
/// Returns a display message for the first invalid input.
pub fn booking_request(
    therapist_id: &str,
    scheduled_at: &str,
    duration: u32,
    session_type: &str,
) -> Result<CreateSessionData, &'static str> {
    let scheduled_at = scheduled_at.trim();
    if scheduled_at.is_empty() {
        return Err("Please choose a date and time");
    }
    if !DURATIONS.contains(&duration) {
        return Err("Please choose a session length");
    }
    let session_type = SessionType::parse(session_type).ok_or("Please choose a session type")?;
    Ok(CreateSessionData {
        therapist_id: therapist_id.to_owned(),
        scheduled_at: scheduled_at.to_owned(),
        duration,
        session_type,
    })
}

fn rating_label(rating: f64) -> String {
    format!("★ {rating:.1}")
}

#[component]
fn TherapistCard(therapist: Therapist) -> impl IntoView {
    let href = format!("/therapists/{}", therapist.id);
    view! {
        <a class="therapist-card" href=href>
            <h3>{therapist.full_name()}</h3>
            <p class="therapist-card__specializations">{therapist.specializations.join(", ")}</p>
            <p class="therapist-card__meta">
                {rating_label(therapist.rating)}
                " · "
                {format!("{} yrs experience", therapist.experience_years)}
            </p>
            {(!therapist.availability).then(|| view! { <span class="therapist-card__busy">"Fully booked"</span> })}
        </a>
    }
}

#[component]
pub fn TherapistDirectoryPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let search = RwSignal::new(String::new());
    let min_rating = RwSignal::new(None::<f64>);
    let available_only = RwSignal::new(false);
    let therapists = RwSignal::new(Vec::<Therapist>::new());
    let loading = RwSignal::new(true);

    let run_query = move |query: DirectoryQuery| {
        let session = session.clone();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let api = session.client().api();
            let result: Result<Vec<Therapist>, ApiError> = match &query {
                DirectoryQuery::All => list_therapists(api).await,
                DirectoryQuery::Search(q) => search_therapists(api, q).await,
                DirectoryQuery::Filter(filter) => filter_therapists(api, filter).await,
            };
            match result {
                Ok(items) => {
                    therapists.try_set(items);
                }
                Err(e) => report_api_error(&session, toasts, &e),
            }
            loading.try_set(false);
        });
    };

    let initial_query = run_query.clone();
    Effect::new(move || initial_query(DirectoryQuery::All));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_query(directory_query(
            &search.get_untracked(),
            min_rating.get_untracked(),
            available_only.get_untracked(),
        ));
    };

    view! {
        <Title text="Find a Therapist - MentWel"/>
        <div class="directory-page">
            <h1>"Find a Therapist"</h1>
            <form class="directory-page__controls" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search by name or specialization"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| min_rating.set(event_target_value(&ev).parse::<f64>().ok())>
                    <option value="">"Any rating"</option>
                    <option value="4">"4+ stars"</option>
                    <option value="4.5">"4.5+ stars"</option>
                </select>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || available_only.get()
                        on:change=move |ev| available_only.set(event_target_checked(&ev))
                    />
                    " Available now"
                </label>
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading therapists..."</p> }>
                <Show
                    when=move || !therapists.get().is_empty()
                    fallback=|| view! { <p>"No therapists match your search."</p> }
                >
                    <div class="directory-page__grid">
                        {move || {
                            therapists
                                .get()
                                .into_iter()
                                .map(|therapist| view! { <TherapistCard therapist=therapist/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
pub fn TherapistDetailPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let therapist = RwSignal::new(None::<Therapist>);
    let loading = RwSignal::new(true);
    let scheduled_at = RwSignal::new(String::new());
    let duration = RwSignal::new(DURATIONS[1]);
    let session_type = RwSignal::new("video".to_owned());
    let busy = RwSignal::new(false);

    let load_session = session.clone();
    Effect::new(move || {
        let Some(id) = params.get().get("id") else {
            return;
        };
        let session = load_session.clone();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match fetch_therapist(session.client().api(), &id).await {
                Ok(found) => {
                    therapist.try_set(Some(found));
                }
                Err(e) => report_api_error(&session, toasts, &e),
            }
            loading.try_set(false);
        });
    });

    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = therapist.get_untracked() else {
            return;
        };
        let request = match booking_request(
            &current.id,
            &scheduled_at.get_untracked(),
            duration.get_untracked(),
            &session_type.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                show_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match create_session(session.client().api(), &request).await {
                Ok(_) => {
                    show_toast(toasts, ToastKind::Success, "Session booked");
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => report_api_error(&session, toasts, &e),
            }
            busy.try_set(false);
        });
    };

    view! {
        <Title text="Therapist - MentWel"/>
        <div class="therapist-page">
            <a href="/therapists" class="therapist-page__back">"← All therapists"</a>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading therapist..."</p> }>
                {move || match therapist.get() {
                    None => view! { <p>"Therapist not found."</p> }.into_any(),
                    Some(t) => view! {
                        <section class="therapist-page__profile">
                            <h1>{t.full_name()}</h1>
                            <p class="therapist-page__meta">
                                {rating_label(t.rating)}
                                " · "
                                {format!("{} yrs experience", t.experience_years)}
                            </p>
                            <p>{t.specializations.join(", ")}</p>
                            <p class="therapist-page__bio">{t.bio.clone()}</p>
                        </section>
                    }
                    .into_any(),
                }}
                <form class="booking-form" on:submit=on_book.clone()>
                    <h2>"Book a Session"</h2>
                    <label for="scheduledAt">"Date & time"</label>
                    <input
                        id="scheduledAt"
                        type="datetime-local"
                        prop:value=move || scheduled_at.get()
                        on:input=move |ev| scheduled_at.set(event_target_value(&ev))
                    />
                    <label for="duration">"Length"</label>
                    <select
                        id="duration"
                        on:change=move |ev| {
                            if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                duration.set(minutes);
                            }
                        }
                    >
                        {DURATIONS
                            .iter()
                            .map(|m| {
                                let m = *m;
                                view! {
                                    <option value=m.to_string() selected=move || duration.get() == m>
                                        {format!("{m} minutes")}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <label for="sessionType">"Format"</label>
                    <select
                        id="sessionType"
                        prop:value=move || session_type.get()
                        on:change=move |ev| session_type.set(event_target_value(&ev))
                    >
                        {[SessionType::Text, SessionType::Voice, SessionType::Video]
                            .into_iter()
                            .map(|kind| {
                                view! { <option value=kind.label().to_lowercase()>{kind.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Booking..." } else { "Book Session" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
