//! Site header with navigation and the signed-in user menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppSession;
use crate::components::toast::show_toast;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

const NAVIGATION: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Features", "/features"),
    ("Pricing", "/pricing"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

const USER_MENU: [(&str, &str); 2] =
    [("Dashboard", "/dashboard"), ("Find a Therapist", "/therapists")];

/// Whether `href` is the section the visitor is in. Home only matches itself.
pub fn is_active_link(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            show_toast(toasts, ToastKind::Success, "You have been signed out");
            navigate("/", NavigateOptions::default());
        });
    });

    let nav_links = NAVIGATION
        .iter()
        .map(|(label, href)| {
            let href = *href;
            let pathname = location.pathname;
            view! {
                <a
                    href=href
                    class="header__link"
                    class:header__link--active=move || is_active_link(&pathname.get(), href)
                >
                    {*label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="header">
            <a href="/" class="header__logo">"MentWel"</a>
            <nav class="header__nav">{nav_links}</nav>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! {
                        <div class="header__auth">
                            <a href="/login" class="btn btn--ghost">"Sign In"</a>
                            <a href="/register" class="btn btn--primary">"Get Started"</a>
                        </div>
                    }
                }
            >
                <div class="header__user">
                    <button class="header__avatar" on:click=move |_| menu_open.update(|open| *open = !*open)>
                        {move || auth.get().user.map(|u| u.initials()).unwrap_or_default()}
                    </button>
                    <span class="header__name">
                        {move || auth.get().user.map(|u| u.display_name()).unwrap_or_default()}
                    </span>
                    <Show when=move || menu_open.get()>
                        <div class="header__menu">
                            {USER_MENU
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <a href=*href class="header__menu-item" on:click=move |_| menu_open.set(false)>
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <button class="header__menu-item header__logout" on:click=move |_| on_logout.run(())>
                                "Sign Out"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </header>
    }
}
