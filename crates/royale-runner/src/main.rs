//! Autonomous agent entry point for the royale game service.
//!
//! The runner drives one agent through an endless cycle of matches. It
//! polls match state over HTTP, runs each snapshot through the
//! priority-ordered decision engine, submits the chosen action, and
//! learns which map regions pay off across matches.
//!
//! # Architecture
//!
//! ```text
//! HTTP (state poll) --> Parser --> Decision Engine --> HTTP (action)
//!                                       ^
//!                              Region Memory (learning)
//! ```
//!
//! The loop is resilient by construction: a failed tick backs off and
//! retries, and only an authentication failure stops the agent.

mod config;
mod error;
mod session;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use royale_client::ApiClient;

use crate::config::BotConfig;
use crate::session::Session;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment
/// variables, builds the HTTP client, then runs the session loop until
/// interrupted.
///
/// # Errors
///
/// Returns an error if initialization fails or the service rejects the
/// API key.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("royale-runner starting");

    // Load configuration from environment
    let config = BotConfig::from_env()?;
    info!(
        api_base = config.api_base,
        agent_name = config.agent_name,
        tick_interval_ms = config.tick_interval.as_millis(),
        request_timeout_ms = config.request_timeout.as_millis(),
        "configuration loaded"
    );

    let client = ApiClient::new(
        &config.api_base,
        &config.api_key,
        &config.agent_name,
        config.request_timeout,
    )?;
    let mut session = Session::new(client);

    info!("session initialized, entering decision loop");
    let mut delay = config.tick_interval;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
            () = tokio::time::sleep(delay) => {}
        }

        match session.step().await {
            Ok(()) => delay = config.tick_interval,
            Err(e) if e.is_fatal() => {
                session.log_summary();
                error!(error = %e, "authentication rejected, giving up");
                return Err(e.into());
            }
            Err(e) => {
                delay = session.record_failure();
                warn!(error = %e, backoff_ms = delay.as_millis(), "tick failed, backing off");
            }
        }
    }

    session.log_summary();
    Ok(())
}
