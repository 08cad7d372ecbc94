//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain value, `auth` the reactive facade that owns every
//! mutation of it, and `persisted_flag` the browser-storage mirror. Page-level
//! state (`projects`) stays separate from the session.

pub mod auth;
pub mod persisted_flag;
pub mod projects;
pub mod session;
