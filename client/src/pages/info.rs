//! Signed-in informational pages: features, about, contact.

use leptos::prelude::*;
use leptos_meta::Title;

const FEATURES: [(&str, &str); 6] = [
    ("Licensed Therapists", "Every therapist on MentWel is verified and licensed to practice."),
    (
        "Anonymous Sessions",
        "Share only what you are comfortable with; your identity stays private.",
    ),
    ("Text, Voice, or Video", "Pick the session format that suits you, and switch any time."),
    ("Flexible Scheduling", "Book sessions around your life, including evenings and weekends."),
    ("Secure by Default", "Conversations are encrypted and never shared."),
    ("Progress Tracking", "See how far you have come with notes and mood check-ins."),
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text="Features - MentWel"/>
        <section class="info">
            <h1>"Everything You Need to Feel Better"</h1>
            <div class="info__grid">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - MentWel"/>
        <section class="info">
            <h1>"About MentWel"</h1>
            <p>
                "MentWel connects people across Nigeria with licensed therapists for anonymous, "
                "secure, and flexible therapy. We believe support should be easy to reach, "
                "affordable, and free of stigma."
            </p>
            <p>
                "Our therapists work across anxiety, depression, grief, relationships, and more, "
                "meeting clients by text, voice, or video."
            </p>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact - MentWel"/>
        <section class="info">
            <h1>"Contact Us"</h1>
            <p>"Questions about your account, billing, or a session? We're here to help."</p>
            <ul class="info__contact">
                <li>"Email: " <a href="mailto:support@mentwel.com">"support@mentwel.com"</a></li>
                <li>"Hours: Monday to Saturday, 8am to 8pm WAT"</li>
            </ul>
            <p class="info__crisis">
                "If you are in crisis or in danger, contact your local emergency services right away."
            </p>
        </section>
    }
}
