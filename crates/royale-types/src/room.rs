//! Room descriptors for pre-match lobby selection.

use serde::{Deserialize, Serialize};

use crate::enums::RoomKind;

/// A joinable lobby room, normalized from whatever shape the room
/// listing endpoint returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDescriptor {
    /// Server-issued room identifier.
    pub id: String,
    /// Players currently in the room.
    pub current_players: u32,
    /// Room capacity.
    pub max_players: u32,
    /// Free or paid entry.
    pub kind: RoomKind,
    /// Entry fee for paid rooms; 0 for free rooms.
    pub entry_cost: f64,
}

impl RoomDescriptor {
    /// A minimal descriptor for a room known only by id.
    ///
    /// Used when the listing endpoint returns bare id strings and the
    /// detail fetch fails: an open free room that the selector can
    /// still consider.
    #[must_use]
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_players: 0,
            max_players: 99,
            kind: RoomKind::Free,
            entry_cost: 0.0,
        }
    }

    /// Whether the room has no seats left.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }
}
