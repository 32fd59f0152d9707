//! Error types for the Tarmac HTTP clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling a remote service
///
/// `RequestFailed` and `ApiError` are transport-level failures (the call
/// itself failed or the service rejected it); `ParseError` means the call
/// succeeded but the body did not match the expected shape. Callers that
/// tag failures for telemetry distinguish the two with [`is_transport`] and
/// [`is_format`].
///
/// [`is_transport`]: ClientError::is_transport
/// [`is_format`]: ClientError::is_format
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, connection refused)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// Response body could not be parsed into the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Whether the call itself failed (network, timeout, or non-2xx status)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ApiError { .. })
    }

    /// Whether the call succeeded but returned a malformed body
    pub fn is_format(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    /// Whether the failure was a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_timeout())
    }

    /// Whether the service answered with a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
