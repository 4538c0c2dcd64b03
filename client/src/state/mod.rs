//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `cart`) so individual components can
//! depend on small focused models. `session` owns the only writer of the
//! auth state.

pub mod auth;
pub mod cart;
pub mod session;
