//! Seams between the session store and the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SupabaseClient` implements both traits in the browser. Tests substitute
//! in-memory fakes. Futures are not `Send`: everything runs on the single
//! browser thread.

#![allow(async_fn_in_trait)]

use super::auth_events::{AuthChanges, AuthSubscription};
use super::error::AuthError;
use super::types::{Credentials, Session, SignUpData, SignUpResponse};

/// Authentication half of the backend.
pub trait AuthProvider {
    /// Current session, if one is persisted and still usable.
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register for sign-in, sign-out and token-refresh notifications.
    fn subscribe(&self) -> (AuthSubscription, AuthChanges);

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn sign_up(&self, credentials: &Credentials, data: &SignUpData) -> Result<SignUpResponse, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// The `profiles` table, keyed by user id.
pub trait ProfileStore {
    /// Role stored on the user's profile row. `Ok(None)` when the column is null.
    async fn fetch_role(&self, user_id: &str) -> Result<Option<String>, AuthError>;

    async fn update_role(&self, user_id: &str, role: &str) -> Result<(), AuthError>;
}
