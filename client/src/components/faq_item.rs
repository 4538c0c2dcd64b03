//! Expandable question/answer row.

use leptos::prelude::*;

#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="faq-item" class:faq-item--open=move || open.get()>
            <button class="faq-item__question" type="button" on:click=move |_| open.update(|o| *o = !*o)>
                <h3>{question}</h3>
                <span class="faq-item__chevron">{move || if open.get() { "−" } else { "+" }}</span>
            </button>
            <Show when=move || open.get()>
                <p class="faq-item__answer">{answer}</p>
            </Show>
        </div>
    }
}
