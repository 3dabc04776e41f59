//! Site footer.

use leptos::prelude::*;

const PLATFORM_LINKS: [(&str, &str); 3] = [
    ("Find a Therapist", "/therapists"),
    ("Pricing", "/pricing"),
    ("Features", "/features"),
];
const SUPPORT_LINKS: [(&str, &str); 2] = [("About", "/about"), ("Contact", "/contact")];

fn link_list(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="footer__links">
            {links
                .iter()
                .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <a href="/" class="footer__logo">"MentWel"</a>
                    <p>
                        "Connect with licensed therapists across Nigeria for anonymous, secure, and flexible therapy sessions."
                    </p>
                </div>
                <div>
                    <h4>"Platform"</h4>
                    {link_list(&PLATFORM_LINKS)}
                </div>
                <div>
                    <h4>"Support"</h4>
                    {link_list(&SUPPORT_LINKS)}
                </div>
            </div>
            <p class="footer__copyright">"© 2024 MentWel. All rights reserved."</p>
        </footer>
    }
}
