//! Brand mark: a heart inside a filled circle.

use leptos::prelude::*;

#[component]
pub fn Logo(#[prop(default = 24)] size: u32) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");
    view! {
        <span class="logo" style=style aria-hidden="true">
            <span class="logo__heart">"♥"</span>
        </span>
    }
}
