//! The client's belief about whether the current user is authenticated.
//!
//! DESIGN
//! ======
//! `authenticated` is the only field the route guard acts on. `loading`
//! separates "not yet determined" from "determined false": while it is set,
//! `authenticated` is at most a hint restored from browser storage and no
//! navigation decision may be made from it.
//!
//! Transitions:
//! - start: `pending()` (server render and first client render agree)
//! - `with_hint`: advisory value from the durable storage mirror
//! - `resolve`: server verification outcome, ignored once determined
//! - `login` / `logout`: explicit user actions, always applied

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Authentication flag plus the "still verifying" marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}

impl Session {
    /// Undetermined session, as created at application start.
    pub const fn pending() -> Self {
        Self { authenticated: false, loading: true }
    }

    /// A session whose outcome is already known.
    pub const fn resolved(authenticated: bool) -> Self {
        Self { authenticated, loading: false }
    }

    /// Record a storage-restored hint. Only meaningful while undetermined.
    #[must_use]
    pub const fn with_hint(self, hint: bool) -> Self {
        if self.loading { Self { authenticated: hint, loading: true } } else { self }
    }

    /// Apply a server verification outcome.
    ///
    /// Returns `false` and leaves the session untouched when an explicit
    /// login or logout already determined it.
    pub fn resolve(&mut self, confirmed: bool) -> bool {
        if !self.loading {
            return false;
        }
        *self = Self::resolved(confirmed);
        true
    }

    pub fn login(&mut self) {
        *self = Self::resolved(true);
    }

    pub fn logout(&mut self) {
        *self = Self::resolved(false);
    }
}
