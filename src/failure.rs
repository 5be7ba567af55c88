//! Failure classes for remote errors.
//!
//! Each class carries its retry semantics so callers classify failures
//! instead of pattern-matching on messages. Classes are derived from the
//! HTTP status first and refined by the provider error code when the
//! response body exposes one.
//!
//! ## Example
//!
//! ```rust
//! use astrocast::failure::FailureClass;
//!
//! let class = FailureClass::from_http_status(429);
//! assert_eq!(class, FailureClass::RateLimited);
//! assert!(class.retryable());
//! assert_eq!(class.category(), "rate");
//! ```

use std::fmt;

/// Classification of a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Malformed request, invalid parameters, or missing required fields
    InvalidRequest,
    /// Invalid, expired, or missing API key
    Authentication,
    /// Valid credentials but insufficient permissions
    PermissionDenied,
    /// Requested model or endpoint does not exist
    NotFound,
    /// Input exceeds context window or payload size limit
    RequestTooLarge,
    /// Request rate limit exceeded
    RateLimited,
    /// Account usage quota or billing limit reached
    QuotaExhausted,
    /// Internal server error on provider side
    ServerError,
    /// Provider service temporarily overloaded
    Overloaded,
    /// Request timed out before a response was received
    Timeout,
    /// Error could not be classified
    Unknown,
}

impl FailureClass {
    /// Returns the standard name (e.g., `"rate_limited"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::QuotaExhausted => "quota_exhausted",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether this failure is transient, i.e. worth retrying.
    ///
    /// Client-side errors (bad request, credentials, quota) fail on every
    /// attempt and are terminal; server-side pressure is transient.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Overloaded | Self::Timeout
        )
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RequestTooLarge => "client",
            Self::RateLimited | Self::QuotaExhausted => "rate",
            Self::ServerError | Self::Overloaded | Self::Timeout => "server",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a provider error code/type string to the corresponding class.
    ///
    /// Supports both standard names (e.g., `"rate_limited"`) and common
    /// provider aliases such as `"invalid_api_key"` or `"overloaded_error"`.
    pub fn from_provider_code(provider_code: &str) -> Option<Self> {
        let class = match provider_code {
            "invalid_request" | "invalid_request_error" => Self::InvalidRequest,
            "authentication" | "authentication_error" | "invalid_api_key" => Self::Authentication,
            "permission_denied" | "permission_error" => Self::PermissionDenied,
            "not_found" | "model_not_found" => Self::NotFound,
            "request_too_large" | "context_length_exceeded" => Self::RequestTooLarge,
            "rate_limited" | "rate_limit_exceeded" => Self::RateLimited,
            "quota_exhausted" | "insufficient_quota" => Self::QuotaExhausted,
            "server_error" => Self::ServerError,
            "overloaded" | "overloaded_error" => Self::Overloaded,
            "timeout" => Self::Timeout,
            _ => return None,
        };
        Some(class)
    }

    /// Maps an HTTP status code to the most likely class.
    ///
    /// Status codes without a standard mapping return [`FailureClass::Unknown`].
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 => Self::Timeout,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            500..=502 => Self::ServerError,
            503 => Self::Overloaded,
            504 => Self::Timeout,
            529 => Self::Overloaded, // non-standard but commonly used for overload
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
