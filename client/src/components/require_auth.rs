//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected routes. While the session store is still loading only a
//! spinner renders, so a reload of a protected page never flashes the login
//! view before the persisted session is restored.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, LOGIN_PATH, guard_decision, redirect_options};

/// Render `children` for a signed-in user, a spinner while auth is loading,
/// or a replacing redirect to the login view.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| guard_decision(&auth.get()));

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="guard-pending" aria-busy="true">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect => view! { <Redirect path=LOGIN_PATH options=redirect_options()/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
