//! Login page: username + password exchange with optional persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page performs the credential exchange itself and reports success to
//! the auth facade. Navigation to the dashboard is driven by the session
//! change, which also covers visitors who arrive already authenticated.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Auth;
use crate::util::auth::install_authenticated_redirect;
use crate::util::paths::{DASHBOARD_PATH, SIGNUP_PATH};

pub const MIN_CREDENTIAL_LEN: usize = 5;
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Check the form before any network call. Both values are returned exactly
/// as typed; the server decides what a username may contain.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if username.chars().count() < MIN_CREDENTIAL_LEN || password.chars().count() < MIN_CREDENTIAL_LEN {
        return Err("Username and password must be at least 5 characters long");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    install_authenticated_redirect(auth, DASHBOARD_PATH, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(()) => {
                    password.set(String::new());
                    auth.login(remember.get_untracked());
                }
                Err(err) => {
                    log::warn!("login rejected: {err}");
                    error.set(Some(err.user_message(LOGIN_FAILED_MESSAGE)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to place your logo"</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <span class="login-password">
                            <input
                                class="login-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="login-password__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                                title="Show password"
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </label>
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href=SIGNUP_PATH>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
