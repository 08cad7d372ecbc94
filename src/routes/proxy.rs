//! Same-origin forwarding of `/auth/*` and `/api/*` to the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to this host only, so the session cookie set by the
//! remote API is first-party. Requests and responses stream through without
//! buffering; only connection-level headers are rewritten.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures become JSON `{"error": ...}` bodies so the client shows
//! them through its normal rejection path.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Headers scoped to a single connection, never forwarded in either
/// direction (RFC 9110 section 7.6.1).
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream timed out")]
    Timeout,
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Text shown to the browser; upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "The service is unavailable. Please try again later.",
            Self::Timeout => "The service took too long to respond. Please try again later.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.public_message() }))).into_response()
    }
}

/// Join the API base URL with the incoming path and query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Whether `name` must be dropped before forwarding.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy end-to-end headers. `Connection` may name further per-hop headers.
pub fn end_to_end_headers(headers: &HeaderMap, drop_host: bool) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || listed.iter().any(|token| token == name.as_str()) {
            continue;
        }
        if drop_host && name == header::HOST {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Whether the request streams a multipart body (the project upload).
pub fn is_upload(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/"))
}

/// `ANY /auth/{*path}` and `ANY /api/{*path}`: forward to the remote API.
///
/// # Errors
///
/// Returns [`ProxyError`] when the upstream cannot be reached or does not
/// answer in time.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query);
    let timeout = if is_upload(&parts.headers) { state.timeouts.upload } else { state.timeouts.request };

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .timeout(timeout)
        .headers(end_to_end_headers(&parts.headers, true))
        .body(reqwest::Body::wrap_stream(body.into_data_stream()))
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(method = %parts.method, %url, error = %err, "upstream request failed");
            err
        })?;

    let status = upstream.status();
    tracing::debug!(method = %parts.method, path = parts.uri.path(), %status, "forwarded");

    let headers = end_to_end_headers(upstream.headers(), false);
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
