//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Pages behind `RequireAuth` can assume a signed-in user.

pub mod checkout;
pub mod dashboard;
pub mod games;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod services;
pub mod signup;
