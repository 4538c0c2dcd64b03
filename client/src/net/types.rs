//! Wire DTOs for the auth provider and profile table.
//!
//! DESIGN
//! ======
//! These types mirror the GoTrue and PostgREST JSON payloads so serde
//! round-trips stay lossless. Unknown user fields are ignored; unknown
//! metadata keys are kept inside `user_metadata`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in session as returned by the token and signup endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on authenticated requests.
    pub access_token: String,
    /// Long-lived token exchanged for a fresh session.
    pub refresh_token: String,
    /// Token type, always `"bearer"` in practice.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of `access_token` in seconds, if reported.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry in seconds since the Unix epoch, if reported.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// The user this session belongs to.
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill in `expires_at` from `expires_in` when the provider omitted it.
    #[must_use]
    pub fn with_expiry_from(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|secs| now_secs + secs);
        }
        self
    }
}

/// The provider's user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Primary email, absent for phone or anonymous users.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata set at sign-up (`name`, `role`, ...).
    #[serde(default)]
    pub user_metadata: serde_json::Map<String, serde_json::Value>,
}

/// Kind of session change delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// One session-change notification.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

impl AuthChange {
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { event: AuthEvent::SignedIn, session: Some(session) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { event: AuthEvent::SignedOut, session: None }
    }

    #[must_use]
    pub fn token_refreshed(session: Session) -> Self {
        Self { event: AuthEvent::TokenRefreshed, session: Some(session) }
    }
}

/// Email + password pair submitted by the login and signup forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Metadata attached to a new account at sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpData {
    pub name: String,
    pub role: String,
}

/// Signup responds with a session when email confirmation is disabled and
/// with the bare user record otherwise.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(Session),
    User(AuthUser),
}

impl SignUpResponse {
    /// The created user, whichever shape the provider answered with.
    #[must_use]
    pub fn user(&self) -> &AuthUser {
        match self {
            Self::Session(session) => &session.user,
            Self::User(user) => user,
        }
    }
}

/// Row shape of `profiles?select=role`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRole {
    #[serde(default)]
    pub role: Option<String>,
}

/// Error body union across GoTrue and PostgREST versions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Most specific human-readable message present in the body.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        [self.msg, self.error_description, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
