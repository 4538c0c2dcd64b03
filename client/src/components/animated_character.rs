//! Bobbing mascot shown beside the consultation call to action. The motion
//! is CSS-only (`.character` keyframes).

use leptos::prelude::*;

#[component]
pub fn AnimatedCharacter(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("character {class}")>
            <div class="character__body">
                <div class="character__face">
                    <span class="character__eye character__eye--left"></span>
                    <span class="character__eye character__eye--right"></span>
                    <span class="character__smile"></span>
                </div>
                <span class="character__hand character__hand--left"></span>
                <span class="character__hand character__hand--right"></span>
            </div>
        </div>
    }
}
