//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `toast`) so components can
//! depend on small focused models. `session` is the only one that talks to
//! the network.

pub mod auth;
pub mod session;
pub mod toast;
