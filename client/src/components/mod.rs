//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (header, footer, toasts) and the route guard
//! while reading shared state from Leptos context providers.

pub mod footer;
pub mod header;
pub mod route_guard;
pub mod toast;
