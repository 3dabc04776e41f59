//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` layers auth and error normalization
//! on top of it, `auth` owns the login/register/logout/SSO exchanges, and
//! `therapists`/`bookings` are thin endpoint wrappers. `types` defines the
//! shared wire schema.

pub mod api;
pub mod auth;
pub mod bookings;
pub mod error;
pub mod therapists;
pub mod transport;
pub mod types;
