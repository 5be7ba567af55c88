use crate::failure::FailureClass;
use std::time::Duration;
use thiserror::Error;

/// Unified error type for the astrocast runtime.
///
/// This aggregates all low-level errors into actionable, high-level
/// categories. [`Error::is_retryable`] is the single classification point
/// consumed by the retry layer: everything that is not explicitly transient
/// is terminal and surfaces immediately.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable client configuration (API key, endpoint URL).
    /// Terminal: retrying cannot repair configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request was rejected before any network call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network-level failure from the HTTP client (connect, TLS, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status.
    #[error("remote error: HTTP {status} ({class}): {message}")]
    Remote {
        status: u16,
        class: FailureClass,
        message: String,
        retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The remote payload could not be decoded into the expected reading
    /// type. Terminal: retrying does not fix malformed model output.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Storage substrate failure surfaced outside the cache path.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl Error {
    /// Whether the retry layer may re-attempt the operation.
    ///
    /// Network faults are assumed transient; remote errors carry the
    /// verdict computed from their failure class at classification time.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::Remote { retryable, .. } => *retryable,
            _ => false,
        }
    }

    /// Server-suggested delay before the next attempt, when one was given.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Remote { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    pub(crate) fn decode(detail: impl Into<String>) -> Self {
        Error::Decode(detail.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
