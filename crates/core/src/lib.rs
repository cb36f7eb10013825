//! Domain helpers for the NGO content-management backend.
//!
//! This crate has no IO and no internal dependencies, so the database,
//! storage, email, and HTTP layers can all share its rules.

pub mod error;
pub mod locale;
pub mod media;
pub mod pagination;
pub mod reorder;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
