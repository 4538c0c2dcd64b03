//! Account creation for parents and children.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chosen role is written twice: into the auth record's metadata at
//! sign-up and onto the `profiles` row afterwards. The session store reads
//! the metadata first and only falls back to the profile row.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::error::AuthError;
use crate::net::provider::{AuthProvider, ProfileStore};
use crate::net::supabase::SupabaseClient;
use crate::net::types::{Credentials, SignUpData};
use crate::pages::login::FILL_ALL_FIELDS;
use crate::state::auth::Role;
use crate::util::auth::HOME_PATH;

pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Length shown as a hint under the password field. Not enforced here.
const PASSWORD_HINT_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: Role,
}

/// All fields present, then passwords equal.
pub(crate) fn validate_signup(form: &SignupForm) -> Result<(Credentials, SignUpData), &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() || form.confirm.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    if form.password != form.confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok((
        Credentials { email: email.to_owned(), password: form.password.clone() },
        SignUpData { name: name.to_owned(), role: form.role.as_str().to_owned() },
    ))
}

fn meets_length_hint(password: &str) -> bool {
    password.chars().count() >= PASSWORD_HINT_LEN
}

/// Create the account, then record the role on the new user's profile row.
pub(crate) async fn sign_up_with_role<A, P>(
    auth: &A,
    profiles: &P,
    credentials: &Credentials,
    data: &SignUpData,
) -> Result<(), AuthError>
where
    A: AuthProvider,
    P: ProfileStore,
{
    let response = auth.sign_up(credentials, data).await?;
    profiles.update_role(&response.user().id, &data.role).await
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<SupabaseClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Guardian);
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let form = SignupForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm: confirm.get(),
            role: role.get(),
        };
        let (credentials, data) = match validate_signup(&form) {
            Ok(parts) => parts,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_up_with_role(&client, &client, &credentials, &data).await {
                Ok(()) => navigate(HOME_PATH, NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    error.set(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let role_option = move |value: Role| {
        view! {
            <label class="role-option" class:role-option--active=move || role.get() == value>
                <input
                    type="radio"
                    name="role"
                    value=value.as_str()
                    prop:checked=move || role.get() == value
                    on:change=move |_| role.set(value)
                />
                <span>{if value == Role::Guardian { "Parent" } else { "Child" }}</span>
            </label>
        }
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <A href="/" attr:class="auth-card__back">"← Back to Home"</A>
                <div class="auth-card__header">
                    <h1>"Create Your Account"</h1>
                    <p>"Join SamVed and start your journey today"</p>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-card__error" role="alert">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <span class="auth-form__label">"I am a:"</span>
                    <div class="role-options">
                        {role_option(Role::Guardian)}
                        {role_option(Role::Learner)}
                    </div>
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        required
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        required
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <div class="auth-password">
                        <input
                            id="password"
                            class="auth-input"
                            type=password_type
                            required
                            placeholder="Create a password"
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
                    <p class="auth-form__hint" class:auth-form__hint--met=move || meets_length_hint(&password.get())>
                        "Minimum 8 characters"
                    </p>
                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        class="auth-input"
                        type=password_type
                        required
                        placeholder="Confirm your password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <label class="auth-form__terms">
                        <input type="checkbox" required/>
                        <span>
                            "I agree to the " <a href="#">"Terms of Service"</a> " and "
                            <a href="#">"Privacy Policy"</a>
                        </span>
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
