//! Decision engine and region-learning for the royale agent.
//!
//! This crate is the pure, synchronous part of the agent: given one
//! [`royale_types::WorldSnapshot`] and the accumulated
//! [`memory::RegionMemory`], it produces exactly one action per tick.
//! No I/O happens here; the driving loop in `royale-runner` owns the
//! transport and feeds outcome events back into the memory.
//!
//! # Modules
//!
//! - [`constants`] -- The complete tuning table, one documented constant per knob
//! - [`engine`] -- The priority-ordered decision policy and combat model
//! - [`memory`] -- The learned region desirability scores
//! - [`rooms`] -- Pre-match lobby room selection

pub mod constants;
pub mod engine;
pub mod memory;
pub mod rooms;

pub use engine::{decide, post_kill_actions, win_probability};
pub use memory::RegionMemory;
pub use rooms::select_room;
