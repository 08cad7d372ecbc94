//! Route-guard decisions and shared auth redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and auth-only pages (login, sign-up) must agree on how a
//! session maps to navigation. The decision is a pure function of the
//! session so it can be evaluated on every session change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::Auth;
use crate::state::session::Session;

/// Outcome of evaluating the guard for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Verification outstanding: render a neutral placeholder.
    Pending,
    /// Render the protected subtree.
    Authorized,
    /// Send the visitor to the login page.
    Redirect,
}

/// Map a session to a guard decision. `authenticated` is ignored while
/// `loading` is set.
pub fn guard_decision(session: &Session) -> GuardDecision {
    match (session.loading, session.authenticated) {
        (true, _) => GuardDecision::Pending,
        (false, true) => GuardDecision::Authorized,
        (false, false) => GuardDecision::Redirect,
    }
}

/// Whether an auth-only page (login, sign-up) should move a visitor on.
pub fn should_skip_auth_page(session: &Session) -> bool {
    !session.loading && session.authenticated
}

/// Navigate to `target` whenever the session is determined authenticated.
pub fn install_authenticated_redirect<F>(auth: Auth, target: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_skip_auth_page(&auth.session()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
