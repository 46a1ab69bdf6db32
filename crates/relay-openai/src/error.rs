//! Provider error type.

use thiserror::Error;

/// Failure of a generation call.
///
/// The `Display` output is shown to users verbatim after `Error: `, so
/// variants carry the provider's own message where one exists.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure: connection, TLS, timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message reported by the API, or the status reason.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response from provider: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded but carried no usable result.
    #[error("provider returned no {0}")]
    Empty(&'static str),

    /// The task running the call panicked or was aborted.
    #[error("generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ProviderError {
    /// Returns the HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
