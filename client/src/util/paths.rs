//! Client route paths.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use crate::net::types::ProjectId;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const NEW_PROJECT_PATH: &str = "/new/project";

/// Scene editor path for a project.
pub fn project_path(id: ProjectId) -> String {
    format!("/project/{id}")
}
