//! Client configuration for the notes service.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! the binary). Everything has a usable default so a local development
//! backend on port 3001 works without any setup.

use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the service base URL
pub const API_BASE_URL_ENV: &str = "JOT_API_BASE_URL";

/// Environment variable holding the optional request timeout in seconds
pub const API_TIMEOUT_ENV: &str = "JOT_API_TIMEOUT_SECS";

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Collection path of the notes resource, relative to the base URL
pub const NOTES_COLLECTION_PATH: &str = "/notes/";

/// Resolved configuration for [`crate::api::HttpNoteResource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized base URL without a trailing slash
    pub api_base_url: String,
    /// Per-request timeout; `None` waits for the server indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config for an explicit base URL with no timeout
    pub fn new(api_base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url.into())?,
            timeout: None,
        })
    }

    /// Read configuration from `JOT_API_BASE_URL` and `JOT_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(API_BASE_URL_ENV).ok(),
            std::env::var(API_TIMEOUT_ENV).ok(),
        )
    }

    /// Resolve configuration from raw (possibly unset) values
    pub fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let api_base_url = match non_blank(base_url) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let timeout = non_blank(timeout_secs)
            .map(|raw| parse_timeout_secs(&raw))
            .transpose()?;
        Ok(Self {
            api_base_url,
            timeout,
        })
    }

    /// URL of the notes collection, e.g. `http://localhost:3001/notes/`
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.api_base_url, NOTES_COLLECTION_PATH)
    }

    /// With a timeout applied to every request
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Unset and whitespace-only values both mean "use the default"
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidConfig(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !["http://", "https://"]
        .iter()
        .any(|scheme| base.starts_with(scheme))
    {
        return Err(Error::InvalidConfig(format!(
            "API base URL must include http:// or https:// (got '{base}')"
        )));
    }
    Ok(base)
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::InvalidConfig(format!(
            "{API_TIMEOUT_ENV} must be a positive number of seconds (got '{raw}')"
        ))),
    }
}
