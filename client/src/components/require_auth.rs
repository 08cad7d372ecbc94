//! Route guard wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluated on every session change. While verification is outstanding
//! it renders a neutral placeholder, so a returning visitor with a valid
//! session never flashes through the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::Auth;
use crate::util::auth::{GuardDecision, guard_decision};
use crate::util::paths::LOGIN_PATH;

/// Render `children` only for a determined, authenticated session.
///
/// Unauthenticated visitors are redirected to the login page; the attempted
/// destination is not remembered.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<Auth>();
    let decision = Memo::new(move |_| guard_decision(&auth.session()));

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="route-pending">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Authorized => children().into_any(),
        GuardDecision::Redirect => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
    }
}
