//! Auth facade: the only mutation path into the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as context by `App`. Views call `login`/`logout`; the route
//! guard and navigation read `session`/`authenticated`/`loading`. The session
//! lives in a single `RwSignal`, so every reader observes a write in the same
//! pass.
//!
//! TRADE-OFFS
//! ==========
//! `login` is optimistic: the credential exchange is done by the caller and
//! the facade only records the outcome. `logout` clears local state before
//! the remote invalidation call, whose failure is logged and otherwise
//! ignored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::persisted_flag::browser_flag;
use super::session::Session;

/// Cheap, copyable handle to the shared session.
#[derive(Clone, Copy, Debug)]
pub struct Auth {
    session: RwSignal<Session>,
}

impl Auth {
    pub fn new(initial: Session) -> Self {
        Self { session: RwSignal::new(initial) }
    }

    /// Current session, tracked.
    pub fn session(self) -> Session {
        self.session.get()
    }

    pub fn authenticated(self) -> bool {
        self.session.with(|s| s.authenticated)
    }

    pub fn loading(self) -> bool {
        self.session.with(|s| s.loading)
    }

    /// Record a successful credential exchange.
    pub fn login(self, persist: bool) {
        self.session.update(Session::login);
        browser_flag().record_login(persist);
    }

    /// Drop the session locally, then ask the server to invalidate it.
    pub fn logout(self) {
        self.session.update(Session::logout);
        browser_flag().clear();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            if let Err(err) = crate::net::api::logout().await {
                log::warn!("remote logout failed: {err}");
            }
        });
    }

    /// Apply the stored hint and start the one-shot server verification.
    ///
    /// Called from a client-only effect so server and client render the same
    /// pending state before hydration.
    pub fn bootstrap(self) {
        let hint = browser_flag().restore();
        self.session.update(|s| *s = s.with_hint(hint));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let confirmed = crate::net::api::verify_session().await;
            if !self.resolve(confirmed) {
                log::info!("verification outcome dropped: session already determined");
            }
        });
    }

    /// Apply a verification outcome and sync the storage mirrors to it.
    /// Returns `false` if the session was already determined by
    /// `login`/`logout`.
    pub fn resolve(self, confirmed: bool) -> bool {
        if !self.session.with_untracked(|s| s.loading) {
            return false;
        }
        self.session.update(|s| {
            s.resolve(confirmed);
        });
        browser_flag().record_verification(confirmed);
        true
    }
}
