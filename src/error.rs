//! Error types for video submission and polling.

use std::time::Duration;

/// Errors that can occur while submitting or polling a video job.
///
/// A provider-reported `failed` status is *not* an error — it is returned
/// as a [`JobOutcome::Failed`](crate::JobOutcome::Failed) so callers can
/// inspect the provider's error payload. This enum covers the failure
/// classes that prevent a job from resolving at all.
#[derive(Debug, thiserror::Error)]
pub enum GrokVideoError {
    /// API key missing or unusable.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The API answered with an HTTP status outside the accepted
    /// {200, 202} set. Carries the status code and raw response body.
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code of the rejected response.
        status: u16,
        /// Raw response body, for the log line.
        body: String,
    },

    /// The poll deadline elapsed before a terminal status appeared.
    #[error("timed out after {0:?} waiting for a terminal status")]
    Timeout(Duration),

    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for video generation operations.
pub type Result<T> = std::result::Result<T, GrokVideoError>;
