//! # client
//!
//! Leptos + WASM frontend for the MentWel therapy-booking site.
//!
//! This crate contains the marketing pages, the login/register/SSO flows,
//! the browser-held auth session (token store, auth client, session
//! manager, route guard), and thin wrappers around the therapist and
//! booking REST endpoints. The host binary renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: attach the client runtime to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
