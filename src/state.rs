//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the remote API and the API base URL.
//! Redirects are never followed so the browser sees them unchanged.
//!
//! The client itself only bounds connecting. Whole-request deadlines are set
//! per request by the forwarder, because a multipart upload may legitimately
//! stream for much longer than an ordinary JSON call.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Whole-request deadlines applied by the forwarder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardTimeouts {
    pub request: Duration,
    pub upload: Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Remote API base URL without a trailing slash.
    pub backend_url: Arc<str>,
    pub timeouts: ForwardTimeouts,
}

impl AppState {
    /// Build state with an upstream client bounded by the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let timeouts = ForwardTimeouts {
            request: Duration::from_secs(config.timeouts.request_secs),
            upload: Duration::from_secs(config.timeouts.upload_secs),
        };
        Ok(Self::from_parts(http, &config.backend_url, timeouts))
    }

    pub fn from_parts(http: reqwest::Client, backend_url: &str, timeouts: ForwardTimeouts) -> Self {
        Self { http, backend_url: Arc::from(backend_url.trim_end_matches('/')), timeouts }
    }
}
