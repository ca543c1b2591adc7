//! Backend endpoint configuration. Values come from the CLI (flags or
//! `MEDINSTA_*` environment variables); nothing here is secret.

use super::errors::ApiError;
use std::time::Duration;
use url::Url;

/// Default request timeout applied to every backend call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Validates the API base URL. Only `http` and `https` with a host are
    /// accepted; a zero timeout falls back to the default.
    ///
    /// # Errors
    /// Returns `ApiError::Config` when the URL is empty, unparseable or uses an
    /// unsupported scheme.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let trimmed = normalize_value(base_url)
            .ok_or_else(|| ApiError::Config("API base URL is not configured.".to_string()))?;

        let url = Url::parse(&trimmed)
            .map_err(|err| ApiError::Config(format!("Invalid API base URL: {err}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::Config(format!(
                    "Unsupported API URL scheme: {scheme}"
                )))
            }
        }

        if url.host_str().is_none() {
            return Err(ApiError::Config(
                "API base URL has no host specified.".to_string(),
            ));
        }

        if url.cannot_be_a_base() {
            return Err(ApiError::Config(
                "API base URL cannot carry paths.".to_string(),
            ));
        }

        let timeout_secs = if timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };

        Ok(Self {
            base_url: url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
