//! REST API helpers for the auth and project endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookie-bearing and
//! bounded by a timeout.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; views decide how to word the
//! failure. Nothing here panics or retries, except the single token refresh
//! attempted during session verification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{CreatedProject, NewProjectForm, ProjectId, ProjectSummary};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest, ResendVerificationRequest, VerifySignUpRequest};

/// Bound for ordinary JSON calls.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;
/// Bound for the multipart project upload, which may carry a video.
pub const UPLOAD_TIMEOUT_MS: u32 = 300_000;

/// File handle attached to a new project.
#[cfg(feature = "hydrate")]
pub type UploadFile = web_sys::File;
/// File handle attached to a new project.
#[cfg(not(feature = "hydrate"))]
pub type UploadFile = ();

#[cfg(any(test, feature = "hydrate"))]
fn project_delete_endpoint(id: ProjectId) -> String {
    format!("/api/projects/{id}/delete")
}

/// A rejected verification is worth one refresh attempt only when the
/// access token was refused, not when the server failed.
#[cfg(any(test, feature = "hydrate"))]
fn should_refresh(err: &ApiError) -> bool {
    err.status() == Some(401)
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials via `POST /auth/login`. The session cookie is set by
/// the response.
///
/// # Errors
///
/// Returns the classified failure when the request fails or is rejected.
pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::json_body(transport::post("/auth/login"), &LoginRequest { username, password })?;
        transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the server-side session via `POST /auth/logout`.
///
/// # Errors
///
/// Returns the classified failure; callers treat it as advisory.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::build(transport::post("/auth/logout"))?;
        transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the server whether the session cookie is valid.
///
/// Calls `POST /auth/verify_access_token`; if the access token is refused,
/// tries `POST /auth/refresh_token` once and re-verifies. Any failure,
/// including a timeout, counts as unauthenticated.
pub async fn verify_session() -> bool {
    #[cfg(feature = "hydrate")]
    {
        match verify_access_token().await {
            Ok(()) => true,
            Err(err) if should_refresh(&err) => {
                if let Err(refresh_err) = refresh_access_token().await {
                    log::info!("session refresh declined: {refresh_err}");
                    return false;
                }
                verify_access_token().await.is_ok()
            }
            Err(err) => {
                log::warn!("session verification failed: {err}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
async fn verify_access_token() -> Result<(), ApiError> {
    let request = transport::build(transport::post("/auth/verify_access_token"))?;
    transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
}

#[cfg(feature = "hydrate")]
async fn refresh_access_token() -> Result<(), ApiError> {
    let request = transport::build(transport::post("/auth/refresh_token"))?;
    transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the classified failure when the request fails or is rejected.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest { username, email, password };
        let request = transport::json_body(transport::post("/auth/register"), &body)?;
        transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Confirm a registration with the emailed code via `POST /auth/verify_sign_up`.
///
/// # Errors
///
/// Returns the classified failure when the request fails or is rejected.
pub async fn verify_sign_up(username: &str, code: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = VerifySignUpRequest { username, code };
        let request = transport::json_body(transport::post("/auth/verify_sign_up"), &body)?;
        transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, code);
        Err(ApiError::Unavailable)
    }
}

/// Request a fresh verification code via `POST /auth/resend-verification`.
///
/// # Errors
///
/// Returns the classified failure when the request fails or is rejected.
pub async fn resend_verification(username: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ResendVerificationRequest { username };
        let request = transport::json_body(transport::post("/auth/resend-verification"), &body)?;
        transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

/// Fetch the current user's projects from `GET /api/projects`.
///
/// # Errors
///
/// Returns the classified failure; callers map it through the status table.
pub async fn list_projects() -> Result<Vec<ProjectSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::build(transport::get("/api/projects"))?;
        transport::decode(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Remove a project via `POST /api/projects/{id}/delete`.
///
/// # Errors
///
/// Returns the classified failure; callers map it through the status table.
pub async fn delete_project(id: ProjectId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::build(transport::post(&project_delete_endpoint(id)))?;
        transport::expect_ok(transport::send(request, REQUEST_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a project via multipart `POST /api/projects`.
///
/// # Errors
///
/// Returns the classified failure when the form cannot be assembled, the
/// request fails, or the response lacks a `project_id`.
pub async fn create_project(form: &NewProjectForm, file: Option<UploadFile>) -> Result<CreatedProject, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let form_data = web_sys::FormData::new().map_err(js_error)?;
        form_data.append_with_str("title", &form.title).map_err(js_error)?;
        form_data
            .append_with_str("description", &form.description)
            .map_err(js_error)?;
        if let Some(file) = file {
            form_data
                .append_with_blob_and_filename("file", &file, &file.name())
                .map_err(js_error)?;
        }
        let request = transport::post("/api/projects")
            .body(form_data)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        transport::decode(transport::send(request, UPLOAD_TIMEOUT_MS).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, file);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod transport {
    use futures::future::{Either, select};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::ApiError;

    pub(super) fn get(url: &str) -> RequestBuilder {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn post(url: &str) -> RequestBuilder {
        Request::post(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(|e| ApiError::Network(e.to_string()))
    }

    pub(super) fn json_body<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
        builder.json(body).map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Send `request`, giving up after `timeout_ms`. The in-flight fetch is
    /// not aborted; its late completion is dropped.
    pub(super) async fn send(request: Request, timeout_ms: u32) -> Result<Response, ApiError> {
        let fetch = request.send();
        let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms);
        futures::pin_mut!(fetch);
        futures::pin_mut!(timeout);
        match select(fetch, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }

    pub(super) async fn expect_ok(response: Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        Err(rejection(response).await)
    }

    pub(super) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !response.ok() {
            return Err(rejection(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|_| ApiError::MalformedBody { status })
    }

    async fn rejection(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_rejection(status, &body)
    }
}
