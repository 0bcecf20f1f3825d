//! Configuration types for the agent runner.
//!
//! All configuration is loaded from environment variables. The runner
//! needs to know how to reach the game service (base URL and API key),
//! what to call itself, and how fast to poll.

use std::time::Duration;

use crate::error::RunnerError;

/// Complete runner configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Game service base URL (e.g. `https://royale.example.com/api`).
    pub api_base: String,
    /// API key sent as a bearer token on every request.
    pub api_key: String,
    /// Display name used when joining rooms.
    pub agent_name: String,
    /// Delay between decision ticks.
    pub tick_interval: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl BotConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `ROYALE_API_BASE` -- game service base URL
    /// - `ROYALE_API_KEY` -- API key for authentication
    ///
    /// Optional variables:
    /// - `ROYALE_AGENT_NAME` -- agent display name (default `royale-agent`)
    /// - `TICK_INTERVAL_MS` -- delay between ticks in milliseconds (default 1000)
    /// - `REQUEST_TIMEOUT_MS` -- HTTP request timeout in milliseconds (default 8000)
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if a required variable is missing
    /// or a numeric variable fails to parse.
    pub fn from_env() -> Result<Self, RunnerError> {
        let api_base = env_var("ROYALE_API_BASE")?;
        let api_key = env_var("ROYALE_API_KEY")?;

        let agent_name =
            std::env::var("ROYALE_AGENT_NAME").unwrap_or_else(|_| "royale-agent".to_owned());

        let tick_interval_ms: u64 = std::env::var("TICK_INTERVAL_MS")
            .unwrap_or_else(|_| "1000".to_owned())
            .parse()
            .map_err(|e| RunnerError::Config(format!("invalid TICK_INTERVAL_MS: {e}")))?;

        let request_timeout_ms: u64 = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "8000".to_owned())
            .parse()
            .map_err(|e| RunnerError::Config(format!("invalid REQUEST_TIMEOUT_MS: {e}")))?;

        Ok(Self {
            api_base,
            api_key,
            agent_name,
            tick_interval: Duration::from_millis(tick_interval_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
        })
    }
}

/// Read a required environment variable.
fn env_var(name: &str) -> Result<String, RunnerError> {
    std::env::var(name)
        .map_err(|e| RunnerError::Config(format!("missing required env var {name}: {e}")))
}
