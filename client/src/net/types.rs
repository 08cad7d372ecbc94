//! Request and response bodies for the auth and project endpoints.
//!
//! DESIGN
//! ======
//! Request payloads borrow their fields so credentials never outlive the
//! submitting view. Project identifiers are integers; keeping them numeric
//! means they can be placed in a URL path without escaping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /auth/login` body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /auth/register` body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /auth/verify_sign_up` body.
#[derive(Debug, Serialize)]
pub struct VerifySignUpRequest<'a> {
    pub username: &'a str,
    pub code: &'a str,
}

/// `POST /auth/resend-verification` body.
#[derive(Debug, Serialize)]
pub struct ResendVerificationRequest<'a> {
    pub username: &'a str,
}

/// Integer project identifier, accepted as a JSON integer or a string of
/// digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => number.as_u64(),
            serde_json::Value::String(raw) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
                raw.parse().ok()
            }
            _ => None,
        };
        id.map(Self).ok_or_else(|| D::Error::custom("expected non-negative integer project id"))
    }
}

/// One entry of `GET /api/projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Success body of `POST /api/projects`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedProject {
    pub project_id: ProjectId,
}

/// Text fields of the new-project form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProjectForm {
    pub title: String,
    pub description: String,
}
