//! Login page for parents and children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits credentials to the auth provider and leaves the rest to the
//! session store: a successful sign-in is broadcast, the store publishes the
//! user, and the authenticated redirect moves the page on to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::animated_character::AnimatedCharacter;
use crate::net::provider::AuthProvider;
use crate::net::supabase::SupabaseClient;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::util::auth::install_authenticated_redirect;

pub(crate) const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub(crate) const INVALID_LOGIN: &str = "Invalid email or password";

/// Which kind of account the form is labelled for. Both use the same
/// credentials endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginAudience {
    #[default]
    Parent,
    Child,
}

impl LoginAudience {
    fn title(self) -> &'static str {
        match self {
            Self::Parent => "Parent Login",
            Self::Child => "Child Login",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Parent => "Sign in to manage your child's account",
            Self::Child => "Sign in to start learning",
        }
    }

    fn email_label(self) -> &'static str {
        match self {
            Self::Parent => "Parent Email",
            Self::Child => "Username or Email",
        }
    }

    fn email_placeholder(self) -> &'static str {
        match self {
            Self::Parent => "Enter parent email",
            Self::Child => "Enter username or email",
        }
    }
}

/// Trim the email and require both fields.
pub(crate) fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Sign in, collapsing every failure into one message for the form.
pub(crate) async fn submit_login<A: AuthProvider>(auth: &A, credentials: &Credentials) -> Result<(), &'static str> {
    match auth.sign_in_with_password(credentials).await {
        Ok(_) => Ok(()),
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            Err(INVALID_LOGIN)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<SupabaseClient>();
    install_authenticated_redirect(auth, use_navigate());

    let audience = RwSignal::new(LoginAudience::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let credentials = match validate_login(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Err(msg) = submit_login(&client, &credentials).await {
                error.set(msg.to_owned());
            }
            busy.set(false);
        });
    };

    let toggle_button = move |target: LoginAudience, label: &'static str| {
        view! {
            <button
                type="button"
                class="auth-toggle__option"
                class:auth-toggle__option--active=move || audience.get() == target
                on:click=move |_| audience.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <A href="/" attr:class="auth-card__back">"← Back to Home"</A>
                <div class="auth-card__header">
                    <AnimatedCharacter class="auth-card__mascot"/>
                    <h1>{move || audience.get().title()}</h1>
                    <p>{move || audience.get().subtitle()}</p>
                    <div class="auth-toggle">
                        {toggle_button(LoginAudience::Parent, "Parent")}
                        {toggle_button(LoginAudience::Child, "Child")}
                    </div>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-card__error" role="alert">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">{move || audience.get().email_label()}</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        required
                        placeholder=move || audience.get().email_placeholder()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <div class="auth-password">
                        <input
                            id="password"
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            required
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-password__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <a href="#" class="auth-form__forgot">"Forgot Password?"</a>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
