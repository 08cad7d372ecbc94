//! Top navigation bar, switching links on the session flag.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Auth;
use crate::util::paths::{DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, NEW_PROJECT_PATH, SIGNUP_PATH};

/// Site navigation. Logging out sends the visitor to the login page.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let navigate = use_navigate();
    let logged_out = RwSignal::new(false);

    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        auth.logout();
        logged_out.set(true);
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=HOME_PATH>
                "LogoPlace"
            </a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.authenticated()
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href=LOGIN_PATH>
                            "Login"
                        </a>
                        <a class="nav-bar__link" href=SIGNUP_PATH>
                            "Sign Up"
                        </a>
                    }
                }
            >
                <a class="nav-bar__link" href=DASHBOARD_PATH>
                    "Dashboard"
                </a>
                <a class="nav-bar__link" href=NEW_PROJECT_PATH>
                    "New Project"
                </a>
                <button class="btn nav-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
