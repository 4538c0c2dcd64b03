//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Written only by the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::AuthUser;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and is cleared once, after the first session
/// resolution attempt finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<AppUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// User metadata as stored on the auth record. Keys other than `name` and
/// `role` are preserved untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserMetadata {
    /// Read metadata out of a raw JSON object. Non-string `name`/`role`
    /// values are treated as absent.
    #[must_use]
    pub fn from_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut extra = map.clone();
        let name = extra.remove("name").and_then(string_value);
        let role = extra.remove("role").and_then(string_value);
        Self { name, role, extra }
    }
}

fn string_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

/// The user as published to the rest of the app.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: String,
    pub email: Option<String>,
    pub metadata: UserMetadata,
}

impl From<&AuthUser> for AppUser {
    fn from(user: &AuthUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            metadata: UserMetadata::from_map(&user.user_metadata),
        }
    }
}

impl AppUser {
    /// Role from metadata; an empty string counts as no role.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.metadata.role.as_deref().filter(|r| !r.is_empty())
    }

    /// Copy of this user with `role` merged into the metadata.
    #[must_use]
    pub fn with_role(&self, role: impl Into<String>) -> Self {
        let mut user = self.clone();
        user.metadata.role = Some(role.into());
        user
    }

    fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// `name`, else the email's local part, else `"User"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name() {
            return name.to_owned();
        }
        self.email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("User")
            .to_owned()
    }

    /// First word of `name`, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name().and_then(|n| n.split_whitespace().next())
    }

    /// Uppercased first character of `name`, else of the email, else `'U'`.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name()
            .or(self.email.as_deref())
            .and_then(|s| s.chars().next())
            .map_or('U', |c| c.to_uppercase().next().unwrap_or(c))
    }

    /// Label shown next to the user's name. Unknown roles fall back to `"student"`.
    #[must_use]
    pub fn role_label(&self) -> &str {
        self.role().unwrap_or("student")
    }

    #[must_use]
    pub fn role_kind(&self) -> Option<Role> {
        self.role().and_then(Role::classify)
    }
}

/// Broad classification of role strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// `"parent"` or `"guardian"`.
    Guardian,
    /// `"child"` or `"student"`.
    Learner,
}

impl Role {
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "parent" | "guardian" => Some(Self::Guardian),
            "child" | "student" => Some(Self::Learner),
            _ => None,
        }
    }

    /// Value written to metadata and the `profiles` table.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guardian => "parent",
            Self::Learner => "child",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Guardian => "Parent",
            Self::Learner => "Student",
        }
    }
}
