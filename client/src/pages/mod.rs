//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages behind `RouteGuard` assume a signed-in user.

pub mod dashboard;
pub mod info;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod register;
pub mod sso_callback;
pub mod therapists;
