use thiserror::Error;

/// Inline message shown for transport failures (unreachable host, timeouts).
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("config error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("request failed ({status}): {}", message.as_deref().unwrap_or("no details"))]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("response error: {0}")]
    Parse(String),
    #[error("request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Message suitable for showing next to the form or view that issued the
    /// request. Backend `{message}` bodies win; otherwise `fallback` is used for
    /// HTTP failures and a generic retry hint for transport failures.
    #[must_use]
    pub fn inline_message(&self, fallback: &str) -> String {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Http { message: None, .. } => fallback.to_string(),
            Self::Network(_) | Self::Timeout(_) => NETWORK_MESSAGE.to_string(),
            Self::Config(message) | Self::Parse(message) | Self::Serialization(message) => {
                message.clone()
            }
        }
    }

    /// True for 401/403 answers, i.e. bad credentials or an expired token.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }
}
