//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - MentWel"/>
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn btn--primary">"Go Home"</a>
        </div>
    }
}
