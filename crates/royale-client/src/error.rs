//! Error types for the game-service client.
//!
//! Uses `thiserror` for typed errors. Every variant here is transient
//! from the driving loop's point of view: the loop retries with
//! backoff and in-memory state is never corrupted by a failed call.

/// Errors that can occur while talking to the game service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connect error, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, truncated for logging.
        body: String,
    },

    /// A response body could not be interpreted as JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// No room-listing endpoint produced a usable response.
    #[error("no usable room listing endpoint")]
    NoRoomEndpoint,
}

impl ClientError {
    /// Whether this error indicates an authentication problem that
    /// retrying will not fix.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
