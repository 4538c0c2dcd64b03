//! Supabase project settings handed from the server to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns the environment. It renders the project URL and anon key
//! into `<meta>` tags in the document head; the hydrated app reads them back
//! before creating its `SupabaseClient`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

use crate::net::supabase::SupabaseConfig;

pub const URL_META: &str = "supabase-url";
pub const ANON_KEY_META: &str = "supabase-anon-key";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing <meta name=\"{0}\"> tag")]
    MissingMeta(&'static str),
    #[error("document unavailable")]
    NoDocument,
}

/// Build a config from a meta-tag lookup. Blank values count as missing.
pub fn config_from_meta<F>(lookup: F) -> Result<SupabaseConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &'static str| {
        lookup(name)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingMeta(name))
    };
    Ok(SupabaseConfig::new(read(URL_META)?, read(ANON_KEY_META)?))
}

/// Read the config from the current document's meta tags.
pub fn read_document_config() -> Result<SupabaseConfig, ConfigError> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ConfigError::NoDocument)?;
        config_from_meta(|name| match document.query_selector(&format!("meta[name=\"{name}\"]")) {
            Ok(Some(el)) => el.get_attribute("content"),
            _ => None,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ConfigError::NoDocument)
    }
}

/// Config for the running app: meta tags in the browser, the server-provided
/// context during SSR. Falls back to an unconfigured client with a warning.
#[must_use]
pub fn app_config() -> SupabaseConfig {
    if let Some(config) = use_context::<SupabaseConfig>() {
        return config;
    }
    match read_document_config() {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("supabase config unavailable: {e}");
            SupabaseConfig::default()
        }
    }
}

/// Meta tags carrying `config` into the rendered document.
#[component]
pub fn SupabaseMeta(config: SupabaseConfig) -> impl IntoView {
    view! {
        <meta name=URL_META content=config.url/>
        <meta name=ANON_KEY_META content=config.anon_key/>
    }
}
