//! Small browser interactions. Each is a no-op outside the browser.

/// Step back one history entry.
pub fn go_back() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.history().and_then(|h| h.back()) {
            leptos::logging::warn!("history back failed: {e:?}");
        }
    }
}

/// Show a blocking alert with `message`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {e:?}");
        }
    }
}
