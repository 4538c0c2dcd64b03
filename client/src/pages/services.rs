//! Services catalog with a cart and a free-consultation request.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::animated_character::AnimatedCharacter;
use crate::state::cart::CartState;
use crate::util::catalog::{SERVICES, Service, featured_services, format_cents};

fn cart_count_label(count: usize) -> String {
    format!("{count} item(s) selected")
}

/// Toggle button for one service. `remove_label` differs between the
/// featured and full listings.
fn cart_button(cart: RwSignal<CartState>, service: &'static Service, remove_label: &'static str) -> impl IntoView {
    let id = service.id;
    let in_cart = move || cart.with(|c| c.contains(id));
    view! {
        <button
            type="button"
            class="service-card__cart"
            class:service-card__cart--remove=in_cart
            on:click=move |_| {
                cart.update(|c| if c.contains(id) { c.remove(id) } else { c.add(id) });
            }
        >
            {move || if in_cart() { remove_label } else { "Add to Cart" }}
        </button>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let show_consultation = RwSignal::new(false);
    let consultation_sent = RwSignal::new(false);

    let on_consultation = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        show_consultation.set(false);
        consultation_sent.set(true);
    };

    view! {
        <main class="page services-page">
            <header class="page__header">
                <h1>"Professional Services"</h1>
                <p>"Expert therapy and support for children and parents"</p>
            </header>

            <Show when=move || cart.with(|c| !c.is_empty())>
                <div class="cart-summary">
                    <div>
                        <h2>"Your Cart"</h2>
                        <p>{move || cart_count_label(cart.with(CartState::len))}</p>
                    </div>
                    <div class="cart-summary__total">
                        <span>"Total:"</span>
                        <strong>{move || format_cents(cart.with(|c| c.summary().subtotal_cents))}</strong>
                        <A href="/checkout" attr:class="button">"Checkout"</A>
                    </div>
                </div>
            </Show>

            <section class="page__section">
                <h2>"Featured Services"</h2>
                <div class="card-grid card-grid--two">
                    {featured_services()
                        .into_iter()
                        .map(|service| {
                            view! {
                                <article class="service-card service-card--featured">
                                    <img src=service.image_url alt=service.title/>
                                    <div class="service-card__body">
                                        <h3>{service.title}<span class="badge">"Featured"</span></h3>
                                        <p>{service.description}</p>
                                        <ul class="service-card__facts">
                                            <li>{service.duration}</li>
                                            <li>{service.format}</li>
                                            <li>{service.availability}</li>
                                        </ul>
                                        <div class="service-card__footer">
                                            <strong>{format_cents(service.price_cents)}</strong>
                                            {cart_button(cart, service, "Remove from Cart")}
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="page__section">
                <h2>"All Services"</h2>
                <div class="card-grid card-grid--three">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <article class="service-card">
                                    <img src=service.image_url alt=service.title/>
                                    <div class="service-card__body">
                                        <h3>{service.title}</h3>
                                        <p>{service.description}</p>
                                        <ul class="service-card__facts">
                                            <li>{service.duration}</li>
                                            <li>{service.format}</li>
                                        </ul>
                                        <div class="service-card__footer">
                                            <strong>{format_cents(service.price_cents)}</strong>
                                            {cart_button(cart, service, "Remove")}
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="therapist-cta">
                <div>
                    <h2>"Meet Our Expert Therapists"</h2>
                    <p>
                        "Our team of certified specialists is dedicated to supporting your child's unique journey. Schedule a free 15-minute consultation to find the right match."
                    </p>
                    <button type="button" class="button" on:click=move |_| show_consultation.set(true)>
                        "Book Free Consultation"
                    </button>
                    <Show when=move || consultation_sent.get()>
                        <p class="therapist-cta__sent">"Thanks! We'll be in touch within 24 hours."</p>
                    </Show>
                </div>
                <AnimatedCharacter/>
            </section>

            <Show when=move || show_consultation.get()>
                <div class="modal-backdrop">
                    <div class="modal" role="dialog" aria-modal="true">
                        <button
                            type="button"
                            class="modal__close"
                            aria-label="Close"
                            on:click=move |_| show_consultation.set(false)
                        >
                            "✕"
                        </button>
                        <h3>"Schedule a Free Consultation"</h3>
                        <p>
                            "Fill out the form below and we'll get back to you within 24 hours to schedule your free 15-minute consultation."
                        </p>
                        <form class="modal__form" on:submit=on_consultation>
                            <label for="consult-name">"Full Name"</label>
                            <input id="consult-name" type="text" placeholder="Your name" required/>
                            <label for="consult-email">"Email"</label>
                            <input id="consult-email" type="email" placeholder="your@email.com" required/>
                            <label for="consult-message">"Message (Optional)"</label>
                            <textarea id="consult-message" rows="3" placeholder="Tell us about your needs..."></textarea>
                            <button type="submit" class="button">"Request Consultation"</button>
                        </form>
                    </div>
                </div>
            </Show>
        </main>
    }
}
