//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages behind the session gate are wrapped in
//! `RequireAuth` at the router, not here.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod new_project;
pub mod not_found;
pub mod registration;
pub mod scene;
