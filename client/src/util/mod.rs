//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route paths, guard decisions and self-clearing messages shared by the
//! pages. Kept free of view code so the rules can be unit tested.

pub mod auth;
pub mod flash;
pub mod paths;
