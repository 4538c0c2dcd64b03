//! Checkout for the services in the cart.
//!
//! Payment is not processed: "Pay Now" confirms the order, empties the cart
//! and returns to the dashboard.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::cart::{CartState, OrderSummary, TAX_PERCENT};
use crate::util::auth::HOME_PATH;
use crate::util::catalog::format_cents;
use crate::util::browser::{alert, go_back};

/// `(label, amount)` rows of the totals box.
fn total_rows(summary: OrderSummary) -> [(String, String); 3] {
    [
        ("Subtotal".to_owned(), format_cents(summary.subtotal_cents)),
        (format!("Tax ({TAX_PERCENT}%)"), format_cents(summary.tax_cents)),
        ("Total".to_owned(), format_cents(summary.total_cents)),
    ]
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();

    let summary = Memo::new(move |_| cart.with(CartState::summary));
    let empty = move || cart.with(CartState::is_empty);

    let on_pay = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if empty() {
            return;
        }
        leptos::logging::log!("order placed: {}", format_cents(summary.get_untracked().total_cents));
        cart.update(CartState::clear);
        alert("Your order has been placed successfully!");
        navigate(HOME_PATH, NavigateOptions::default());
    };

    view! {
        <main class="page checkout-page">
            <header class="page__header">
                <button type="button" class="link-button" on:click=move |_| go_back()>"← Back to Services"</button>
                <h1>"Checkout"</h1>
                <p>"Complete your purchase"</p>
            </header>
            <form class="checkout" on:submit=on_pay>
                <section class="checkout__order">
                    <h2>"Order Summary"</h2>
                    <Show
                        when=move || !empty()
                        fallback=|| view! {
                            <p class="checkout__empty">
                                "Your cart is empty. " <A href="/services">"Browse services"</A>
                            </p>
                        }
                    >
                        {move || {
                            cart.with(CartState::services)
                                .into_iter()
                                .map(|service| {
                                    view! {
                                        <div class="checkout__line">
                                            <div>
                                                <h3>{service.title}</h3>
                                                <p>{format!("{} • {}", service.duration, service.format)}</p>
                                            </div>
                                            <strong>{format_cents(service.price_cents)}</strong>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                    <h3>"Contact Information"</h3>
                    <label for="checkout-name">"Full Name"</label>
                    <input id="checkout-name" type="text" required placeholder="John Doe"/>
                    <label for="checkout-email">"Email"</label>
                    <input id="checkout-email" type="email" required placeholder="you@example.com"/>
                    <label for="checkout-phone">"Phone"</label>
                    <input id="checkout-phone" type="tel" required placeholder="+1 (555) 000-0000"/>
                    <label for="checkout-address">"Address"</label>
                    <textarea id="checkout-address" rows="3" placeholder="123 Main St, City, Country"></textarea>
                </section>
                <aside class="checkout__totals">
                    <h3>"Order Total"</h3>
                    {move || {
                        total_rows(summary.get())
                            .into_iter()
                            .map(|(label, amount)| view! { <div class="checkout__row"><span>{label}</span><span>{amount}</span></div> })
                            .collect_view()
                    }}
                    <button type="submit" class="button" disabled=empty>"Pay Now"</button>
                    <p class="checkout__secure">"Secure payment processing"</p>
                </aside>
            </form>
        </main>
    }
}
