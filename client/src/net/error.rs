//! Failure taxonomy for REST calls and its user-facing wording.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses carrying `{"error": "..."}` surface the server text
//! verbatim. Unparseable bodies, transport failures and timeouts map to fixed
//! messages. Project listing/deleting maps status codes through a fixed table
//! instead, since those endpoints answer with bare statuses.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

pub const MALFORMED_BODY_MESSAGE: &str = "Unable to process server response";
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred. Please try again later.";

/// Why a request did not produce a usable success response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx with a parseable JSON body. `message` is the body's `error`
    /// field when present.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// Body could not be decoded (either a 2xx with an unexpected shape or a
    /// non-2xx that was not JSON).
    #[error("malformed response body (status {status})")]
    MalformedBody { status: u16 },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// Called outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body text.
    pub fn from_rejection(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::Rejected { status, message: parsed.error.filter(|m| !m.is_empty()) },
            Err(_) => Self::MalformedBody { status },
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::MalformedBody { status } => Some(*status),
            Self::Network(_) | Self::Timeout | Self::Unavailable => None,
        }
    }

    /// Text to show the user. `fallback` covers a rejection without an
    /// `error` field.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } => fallback.to_owned(),
            Self::MalformedBody { .. } => MALFORMED_BODY_MESSAGE.to_owned(),
            Self::Network(_) | Self::Timeout | Self::Unavailable => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Text for the project list/delete calls, keyed on status only.
    pub fn status_user_message(&self) -> String {
        self.status()
            .map_or_else(|| NETWORK_ERROR_MESSAGE.to_owned(), status_message)
    }
}

/// Fixed status table for project listing and deletion.
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Bad request. Please check your input.".to_owned(),
        401 => "Your session has expired. Please log in again.".to_owned(),
        403 => "You do not have permission to do that.".to_owned(),
        404 => "Project not found.".to_owned(),
        500 => "Server error. Please try again later.".to_owned(),
        other => format!("Server error {other}"),
    }
}
