//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one `Session` for the running application. It mirrors
//! session notifications into an `RwSignal<AuthState>` that the header,
//! route guard, and pages read, and runs the mount check on the client only
//! so server-rendered HTML and the first hydrated frame agree.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::route_guard::RouteGuard;
use crate::components::toast::{ToastHost, show_toast};
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::auth::AuthClient;
use crate::net::error::ApiError;
use crate::net::transport::HttpTransport;
use crate::pages::{
    dashboard::DashboardPage,
    info::{AboutPage, ContactPage, FeaturesPage},
    landing::LandingPage,
    login::LoginPage,
    not_found::NotFoundPage,
    pricing::PricingPage,
    register::RegisterPage,
    sso_callback::SsoCallbackPage,
    therapists::{TherapistDetailPage, TherapistDirectoryPage},
};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::storage::BrowserStorage;
use crate::util::token_store::TokenStore;

/// The session type the browser app runs with.
pub type AppSession = Session<BrowserStorage, HttpTransport>;

/// Build the application session from build-time configuration.
pub fn new_app_session() -> AppSession {
    let api = ApiClient::new(
        ApiConfig::from_build_env(),
        TokenStore::new(BrowserStorage),
        HttpTransport,
    );
    Session::new(AuthClient::new(api))
}

/// Show `err` as an error toast; a revoked token also ends the session so
/// the route guard sends the visitor to `/login`.
pub fn report_api_error(session: &AppSession, toasts: RwSignal<ToastState>, err: &ApiError) {
    session.end_if_revoked(err);
    show_toast(toasts, ToastKind::Error, err.message());
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, the mirrored auth signal, and the toast queue,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = new_app_session();
    let auth = RwSignal::new(session.state());
    let toasts = RwSignal::new(ToastState::default());

    let subscription = session.subscribe(move |state| {
        auth.try_set(state.clone());
    });
    on_cleanup(move || drop(subscription));

    provide_context(session.clone());
    provide_context(auth);
    provide_context(toasts);

    // Effects only run in the browser, where the token store is readable.
    Effect::new(move || session.check());

    view! {
        <Stylesheet id="leptos" href="/pkg/mentwel.css"/>
        <Title text="MentWel - Mental Health Platform"/>
        <Meta
            name="description"
            content="Connect with licensed therapists across Nigeria for anonymous, secure, and flexible therapy sessions via text, voice, and video."
        />

        <Router>
            <Header/>
            <main class="main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("sso-callback") view=SsoCallbackPage/>
                    <Route path=StaticSegment("features") view=|| view! { <RouteGuard><FeaturesPage/></RouteGuard> }/>
                    <Route path=StaticSegment("about") view=|| view! { <RouteGuard><AboutPage/></RouteGuard> }/>
                    <Route path=StaticSegment("contact") view=|| view! { <RouteGuard><ContactPage/></RouteGuard> }/>
                    <Route path=StaticSegment("dashboard") view=|| view! { <RouteGuard><DashboardPage/></RouteGuard> }/>
                    <Route
                        path=StaticSegment("therapists")
                        view=|| view! { <RouteGuard><TherapistDirectoryPage/></RouteGuard> }
                    />
                    <Route
                        path=(StaticSegment("therapists"), ParamSegment("id"))
                        view=|| view! { <RouteGuard><TherapistDetailPage/></RouteGuard> }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
