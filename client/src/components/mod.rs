//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod animated_character;
pub mod faq_item;
pub mod footer;
pub mod logo;
pub mod navbar;
pub mod require_auth;
