//! Error types for the agent runner.
//!
//! Uses `thiserror` for typed errors that surface through the session
//! loop: configuration problems, service calls, payload handling.

use royale_client::ClientError;

/// Errors that can occur while running the agent.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// A call to the game service failed.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RunnerError {
    /// Whether this error is an authentication failure that retrying
    /// cannot fix. The session loop gives up instead of backing off.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_auth_failure())
    }
}
