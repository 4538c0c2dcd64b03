//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the auth forms apply identical redirect behavior:
//! nothing is decided while the session store is still loading.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// What a protected route should render for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; show only a neutral indicator.
    Pending,
    /// Settled without a user; replace the history entry with the login view.
    Redirect,
    /// Settled with a user.
    Render,
}

#[must_use]
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}

/// Options for the guard's redirect: replace, so "back" does not return to
/// the protected page.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Whether an auth form should move on to `HOME_PATH`.
#[must_use]
pub fn should_leave_auth_form(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Navigate to `HOME_PATH` whenever auth has loaded and a user is present.
pub fn install_authenticated_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_auth_form(&auth.get()) {
            navigate(HOME_PATH, redirect_options());
        }
    });
}
