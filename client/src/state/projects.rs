//! Project-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Listing and deleting share one error slot worded through the status
//! table. A failed listing leaves no items behind, so the dashboard never
//! shows a stale list next to an error.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::error::ApiError;
use crate::net::types::{ProjectId, ProjectSummary};
use crate::util::flash::FlashMessage;

#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<ProjectSummary>,
    pub loading: bool,
    /// A listing has succeeded since the last failure.
    pub loaded: bool,
    /// Project whose deletion is in flight.
    pub deleting: Option<ProjectId>,
    pub error: FlashMessage,
}

impl ProjectsState {
    pub fn begin_list(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn apply_list(&mut self, result: Result<Vec<ProjectSummary>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error.clear();
            }
            Err(err) => {
                self.items.clear();
                self.loaded = false;
                self.error.show(err.status_user_message());
            }
        }
    }

    pub fn begin_delete(&mut self, id: ProjectId) {
        self.deleting = Some(id);
        self.error.clear();
    }

    /// Finish a delete. On success the project is dropped locally.
    pub fn apply_delete(&mut self, id: ProjectId, result: Result<(), ApiError>) {
        if self.deleting == Some(id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => self.items.retain(|p| p.id != id),
            Err(err) => {
                self.error.show(err.status_user_message());
            }
        }
    }

    /// Whether the list section should render at all.
    pub fn shows_list(&self) -> bool {
        !self.loading && self.loaded
    }
}
