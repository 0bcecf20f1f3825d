//! Shared type definitions for the royale agent.
//!
//! This crate is the single source of truth for the value types the
//! decision engine reads and the actions it emits. Everything here is
//! rebuilt fresh each tick from the game service's responses; nothing
//! carries identity beyond the id strings the service issues.
//!
//! # Modules
//!
//! - [`enums`] -- Closed enumerations (weapon tiers, match status, region events)
//! - [`entities`] -- Per-tick entity snapshots (weapons, enemies, the zone, loot)
//! - [`snapshot`] -- The full world snapshot delivered to the engine each tick
//! - [`actions`] -- The tagged action sum type submitted back to the service
//! - [`room`] -- Room descriptors for pre-match lobby selection

pub mod actions;
pub mod entities;
pub mod enums;
pub mod room;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use actions::{Action, MovePriority};
pub use entities::{Enemy, LootEntry, Weapon, Zone};
pub use enums::{MatchStatus, RegionEvent, RoomKind, WeaponTier};
pub use room::RoomDescriptor;
pub use snapshot::{HEAL_PRIORITY, WorldSnapshot};
