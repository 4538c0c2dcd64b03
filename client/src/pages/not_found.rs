//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::animated_character::AnimatedCharacter;
use crate::util::browser::go_back;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <div class="not-found__code">"404"</div>
            <AnimatedCharacter/>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <div class="not-found__actions">
                <A href="/" attr:class="button">"Back to Home"</A>
                <button type="button" class="button button--outline" on:click=move |_| go_back()>
                    "Go Back"
                </button>
            </div>
        </main>
    }
}
