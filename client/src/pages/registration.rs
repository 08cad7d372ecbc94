//! Sign-up page: account details, then the emailed verification code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two remote steps (`/auth/register`, `/auth/verify_sign_up`) share one
//! page. Once both succeed the visitor is sent to the login page; the page
//! never logs anyone in by itself.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::Auth;
use crate::util::auth::install_authenticated_redirect;
use crate::util::flash::{FlashMessage, flash};
use crate::util::paths::{DASHBOARD_PATH, LOGIN_PATH};

pub const MIN_USERNAME_LEN: usize = 5;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const VERIFICATION_FAILED_MESSAGE: &str = "Verification failed";
pub const RESEND_FAILED_MESSAGE: &str = "Could not resend the verification code";
pub const RESEND_SENT_MESSAGE: &str = "A new verification code has been sent.";

/// Where the visitor is in the sign-up flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationStage {
    #[default]
    Details,
    Verify,
    Done,
}

/// Validated account details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Check the details form before any network call.
pub fn validate_registration_input(
    username: &str,
    email: &str,
    password: &str,
    verify_password: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || verify_password.is_empty() {
        return Err("Please fill in all fields");
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err("Username must be at least 5 characters long");
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long");
    }
    if password != verify_password {
        return Err("Passwords do not match");
    }
    Ok(Registration { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Check the verification code form.
pub fn validate_verification_code(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Enter the verification code from your email");
    }
    Ok(code.to_owned())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let navigate = use_navigate();
    install_authenticated_redirect(auth, DASHBOARD_PATH, navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let verify_password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let stage = RwSignal::new(RegistrationStage::Details);
    let error = RwSignal::new(FlashMessage::default());
    let info = RwSignal::new(FlashMessage::default());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if stage.get() == RegistrationStage::Done {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let details = match validate_registration_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &verify_password.get_untracked(),
        ) {
            Ok(details) => details,
            Err(message) => {
                flash(error, message.to_owned());
                return;
            }
        };
        error.update(FlashMessage::clear);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&details.username, &details.email, &details.password).await {
                Ok(()) => {
                    username.set(details.username);
                    password.set(String::new());
                    verify_password.set(String::new());
                    stage.set(RegistrationStage::Verify);
                }
                Err(err) => flash(error, err.user_message(REGISTRATION_FAILED_MESSAGE)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = details;
            busy.set(false);
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let code_value = match validate_verification_code(&code.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                flash(error, message.to_owned());
                return;
            }
        };
        error.update(FlashMessage::clear);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_sign_up(&username.get_untracked(), &code_value).await {
                Ok(()) => stage.set(RegistrationStage::Done),
                Err(err) => flash(error, err.user_message(VERIFICATION_FAILED_MESSAGE)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = code_value;
            busy.set(false);
        }
    };

    let on_resend = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        info.update(FlashMessage::clear);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_verification(&username.get_untracked()).await {
                Ok(()) => flash(info, RESEND_SENT_MESSAGE.to_owned()),
                Err(err) => flash(error, err.user_message(RESEND_FAILED_MESSAGE)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <div class="register-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <Show when=move || error.with(FlashMessage::is_shown)>
                    <p class="login-message login-message--error">
                        {move || error.with(|f| f.text().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <Show when=move || info.with(FlashMessage::is_shown)>
                    <p class="login-message">{move || info.with(|f| f.text().unwrap_or_default().to_owned())}</p>
                </Show>
                <Show
                    when=move || stage.get() == RegistrationStage::Details
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_verify>
                                <h2>"Verify Your Account"</h2>
                                <p class="login-card__subtitle">
                                    "We emailed a code to confirm "
                                    <strong>{move || username.get()}</strong>
                                </p>
                                <label class="login-label">
                                    "Verification Code"
                                    <input
                                        class="login-input login-input--code"
                                        type="text"
                                        autocomplete="one-time-code"
                                        prop:value=move || code.get()
                                        on:input=move |ev| code.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Verify"
                                </button>
                                <button
                                    class="btn login-button--secondary"
                                    type="button"
                                    disabled=move || busy.get()
                                    on:click=on_resend
                                >
                                    "Resend code"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_register>
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
                            "Email"
                            <input
                                class="login-input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="login-label">
                            "Password"
                            <input
                                class="login-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="login-label">
                            "Verify Password"
                            <input
                                class="login-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || verify_password.get()
                                on:input=move |ev| verify_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Registering..." } else { "Register" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
