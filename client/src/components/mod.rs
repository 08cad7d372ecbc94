//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and list entries while reading the
//! shared auth facade from Leptos context.

pub mod navigation_bar;
pub mod project_card;
pub mod require_auth;
