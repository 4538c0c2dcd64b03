//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the published auth state to pick its links and identity block.
//! Logout goes through the shared `SupabaseClient`; the session store picks
//! up the resulting sign-out notification like any other.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::logo::Logo;
use crate::net::provider::AuthProvider;
use crate::net::supabase::SupabaseClient;
use crate::state::auth::{AppUser, AuthState};

/// `(href, label)` pairs shown for the given auth status.
fn nav_links(signed_in: bool) -> &'static [(&'static str, &'static str)] {
    if signed_in {
        &[("/dashboard", "Dashboard"), ("/games", "Games"), ("/services", "Services")]
    } else {
        &[("/", "Home")]
    }
}

/// Name and role label for the identity block.
fn identity(user: &AppUser) -> (String, String) {
    (user.display_name(), user.role_label().to_owned())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<SupabaseClient>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let signed_in = Memo::new(move |_| auth.get().is_authenticated());
    let who = move || auth.get().user.as_ref().map(identity).unwrap_or_default();

    let logout_requested = RwSignal::new(false);
    Effect::new(move || {
        if !logout_requested.get() {
            return;
        }
        logout_requested.set(false);
        menu_open.set(false);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = client.sign_out().await {
                leptos::logging::warn!("sign out failed: {e}");
            }
            navigate("/", NavigateOptions::default());
        });
    });

    let links = move |mobile: bool| {
        nav_links(signed_in.get())
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href attr:class="navbar__link" on:click=move |_| if mobile { menu_open.set(false) }>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    let identity_block = move || {
        let (name, role) = who();
        view! {
            <div class="navbar__identity">
                <div class="navbar__name">{name}</div>
                <div class="navbar__role">{role}</div>
            </div>
            <button class="navbar__logout" type="button" on:click=move |_| logout_requested.set(true)>
                "Logout"
            </button>
        }
    };

    let auth_links = move || {
        view! {
            <A href="/login" attr:class="navbar__link" on:click=move |_| menu_open.set(false)>"Login"</A>
            <A href="/signup" attr:class="navbar__cta" on:click=move |_| menu_open.set(false)>"Sign Up"</A>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <Logo size=36/>
                    <span class="navbar__title">"SamVed"</span>
                </A>
                <div class="navbar__desktop">
                    {move || links(false)}
                    <Show when=move || signed_in.get() fallback=auth_links>
                        {identity_block}
                    </Show>
                </div>
                <button
                    class="navbar__menu-toggle"
                    type="button"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {move || links(true)}
                    <Show when=move || signed_in.get() fallback=auth_links>
                        {identity_block}
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
