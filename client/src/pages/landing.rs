//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

const STEPS: [(&str, &str); 3] = [
    ("Create Your Account", "Sign up in minutes and tell us about your mental health goals."),
    ("Find Your Therapist", "Browse verified therapists and choose the perfect match for you."),
    ("Begin Healing", "Start your sessions and track your journey to better mental health."),
];

const CHANNELS: [(&str, &str); 3] = [
    ("Text", "Message your therapist at your own pace, from anywhere."),
    ("Voice", "Talk things through without needing to be on camera."),
    ("Video", "Face-to-face sessions from the comfort of home."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cta_href = move || if auth.get().is_authenticated() { "/dashboard" } else { "/register" };

    view! {
        <section class="hero">
            <p class="hero__badge">"Your Mental Wellness Matters"</p>
            <h1 class="hero__title">"Your Journey to " <span>"Mental Wellness"</span> " Starts Here"</h1>
            <p class="hero__lead">
                "Connect with licensed therapists across Nigeria for anonymous, secure, and flexible therapy sessions. "
                "Your mental health matters, and we're here to support you every step of the way."
            </p>
            <div class="hero__actions">
                <a href=cta_href class="btn btn--primary">"Start Your Journey"</a>
                <a href="/pricing" class="btn btn--ghost">"See Pricing"</a>
            </div>
        </section>

        <section class="steps">
            <h2>"How It Works"</h2>
            <div class="steps__grid">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, description))| {
                        view! {
                            <article class="card">
                                <span class="card__step">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="channels">
            <h2>"Therapy, Your Way"</h2>
            <div class="channels__grid">
                {CHANNELS
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <article class="card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
