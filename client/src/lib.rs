//! # client
//!
//! Leptos + WASM frontend for the SamVed portal: public pages, the auth
//! forms, and the signed-in dashboard, games, services and checkout views.
//!
//! The session store (`state::session`) keeps the published auth state in
//! step with Supabase; `components::require_auth` guards the protected
//! routes against it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
