//! Networking modules for the auth provider and profile table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the traits the session store depends on, `supabase`
//! implements them over REST, `auth_events` fans session changes out to
//! subscribers, and `types` defines the wire schema.

pub mod auth_events;
pub mod error;
pub mod provider;
pub mod supabase;
pub mod types;
