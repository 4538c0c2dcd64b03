//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and static data from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod catalog;
pub mod config;
