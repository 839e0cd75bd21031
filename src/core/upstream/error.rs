//! Upstream API error types.

use thiserror::Error;

/// Result type for upstream API calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Errors that can occur while talking to an upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a response (DNS, connection refused, reset...).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("API request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The body could not be decoded in the declared format.
    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// Create a transport error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create a status error from an HTTP status code.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Create a malformed-response error.
    pub fn malformed(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            url: url.into(),
            source,
        }
    }

    /// The HTTP status carried by this error, if the upstream answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
