//! HTTP client and payload normalization for the royale game service.
//!
//! Everything the agent knows arrives through this crate, and nothing
//! decision-relevant lives in it: the [`api::ApiClient`] talks to the
//! remote service with explicit timeouts and typed errors, and
//! [`parse`] defensively normalizes whatever JSON comes back into the
//! strongly typed shapes of `royale-types`. The decision core never
//! sees a raw payload.
//!
//! # Modules
//!
//! - [`api`] -- The HTTP client: rooms, match state, action submission, balance
//! - [`parse`] -- Raw JSON to typed snapshots, rooms, and action outcomes
//! - [`error`] -- The client error taxonomy

pub mod api;
pub mod error;
pub mod parse;

pub use api::ApiClient;
pub use error::ClientError;
pub use parse::{ActionOutcome, parse_outcome, parse_snapshot};
