//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Matches the browser's own bound on the project upload.
pub const DEFAULT_UPSTREAM_UPLOAD_TIMEOUT_SECS: u64 = 300;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing env var {var}")]
    Missing { var: &'static str },

    /// A numeric variable did not parse.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// `BACKEND_URL` is not an http(s) URL.
    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
    /// Bound for multipart requests, which stream a video through.
    pub upload_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Remote API base URL without a trailing slash.
    pub backend_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl Config {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_URL`: base URL of the remote API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_TIMEOUT_SECS`: default 60
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `UPSTREAM_UPLOAD_TIMEOUT_SECS`: default 300
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_backend = lookup("BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var: "BACKEND_URL" })?;
        let backend_url = parse_backend_url(&raw_backend)?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                lookup("UPSTREAM_CONNECT_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
            upload_secs: parse_or(
                "UPSTREAM_UPLOAD_TIMEOUT_SECS",
                lookup("UPSTREAM_UPLOAD_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_UPLOAD_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, backend_url, timeouts })
    }
}

fn parse_backend_url(raw: &str) -> Result<String, ConfigError> {
    let lower = raw.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(ConfigError::BackendScheme(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}
