//! Error types for the wordroll HTTP shell.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wordroll_core::PassphraseError;
use wordroll_random_org::RandomOrgError;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local generation failed (delegated from wordroll-core).
    #[error(transparent)]
    Passphrase(#[from] PassphraseError),

    /// The remote random source failed.
    #[error("upstream random source failed: {0}")]
    Upstream(#[from] RandomOrgError),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Passphrase(PassphraseError::InvalidWordCount { .. }) => StatusCode::BAD_REQUEST,
            Self::Passphrase(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(RandomOrgError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "passphrase request failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Errors that stop the service from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The word list could not be loaded.
    #[error("cannot load word list: {0}")]
    Wordlist(#[source] PassphraseError),

    /// The random.org client could not be built.
    #[error("cannot build random.org client: {0}")]
    RandomOrg(#[from] RandomOrgError),

    /// Logging could not be initialised.
    #[error("cannot initialise logging: {0}")]
    Logging(String),

    /// Binding or serving the listener failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
