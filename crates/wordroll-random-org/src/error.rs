//! Error types for random.org operations.

/// Errors that can occur when requesting numbers from random.org.
#[derive(Debug, thiserror::Error)]
pub enum RandomOrgError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Server answered with a non-2xx status.
    #[error("unexpected HTTP status {status_code}")]
    Status {
        /// HTTP status code.
        status_code: u16,
    },

    /// JSON-RPC error object returned by the service (bad key, quota, ...).
    #[error("random.org error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Human-readable message from the service.
        message: String,
    },

    /// The response body was not the expected JSON-RPC shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The service returned a different number of integers than requested.
    #[error("expected {expected} integers, got {got}")]
    CountMismatch {
        /// Count that was requested.
        expected: usize,
        /// Count that was returned.
        got: usize,
    },

    /// A returned integer lies outside the requested range.
    #[error("integer {value} outside {min}..={max}")]
    OutOfRange {
        /// Offending value.
        value: i64,
        /// Requested lower bound.
        min: u16,
        /// Requested upper bound.
        max: u16,
    },
}

impl RandomOrgError {
    /// Classify a transport error, separating timeouts from other failures.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}
