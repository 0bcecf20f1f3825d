//! Pre-match lobby room selection.
//!
//! Light filtering, not learning: skip rooms the agent cannot enter,
//! then prefer the most populated survivor since more players means
//! more potential kills.

use tracing::debug;

use royale_types::{RoomDescriptor, RoomKind};

/// Pick the room to join, if any qualifies.
///
/// Full rooms are skipped; paid rooms are skipped when the balance
/// does not cover the entry cost. Among the survivors the highest
/// current player count wins, ties resolving to the first listed.
#[must_use]
pub fn select_room(rooms: &[RoomDescriptor], balance: f64) -> Option<&RoomDescriptor> {
    let mut best: Option<&RoomDescriptor> = None;

    for room in rooms {
        if room.is_full() {
            debug!(room_id = room.id, "skipping full room");
            continue;
        }
        if room.kind == RoomKind::Paid && balance < room.entry_cost {
            debug!(
                room_id = room.id,
                entry_cost = room.entry_cost,
                balance = balance,
                "skipping unaffordable paid room"
            );
            continue;
        }
        let beats_best = best.is_none_or(|b| room.current_players > b.current_players);
        if beats_best {
            best = Some(room);
        }
    }

    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn room(id: &str, current: u32, max: u32, kind: RoomKind, cost: f64) -> RoomDescriptor {
        RoomDescriptor {
            id: id.to_owned(),
            current_players: current,
            max_players: max,
            kind,
            entry_cost: cost,
        }
    }

    #[test]
    fn full_rooms_are_skipped() {
        let rooms = vec![
            room("full", 10, 10, RoomKind::Free, 0.0),
            room("open", 3, 10, RoomKind::Free, 0.0),
        ];
        let chosen = select_room(&rooms, 0.0).unwrap();
        assert_eq!(chosen.id, "open");
    }

    #[test]
    fn unaffordable_paid_rooms_are_skipped() {
        let rooms = vec![
            room("rich", 9, 10, RoomKind::Paid, 50.0),
            room("free", 2, 10, RoomKind::Free, 0.0),
        ];
        let broke = select_room(&rooms, 10.0).unwrap();
        assert_eq!(broke.id, "free");

        let funded = select_room(&rooms, 100.0).unwrap();
        assert_eq!(funded.id, "rich");
    }

    #[test]
    fn most_populated_survivor_wins() {
        let rooms = vec![
            room("quiet", 1, 10, RoomKind::Free, 0.0),
            room("busy", 8, 10, RoomKind::Free, 0.0),
            room("mid", 4, 10, RoomKind::Free, 0.0),
        ];
        let chosen = select_room(&rooms, 0.0).unwrap();
        assert_eq!(chosen.id, "busy");
    }

    #[test]
    fn population_ties_break_to_first_listed() {
        let rooms = vec![
            room("first", 5, 10, RoomKind::Free, 0.0),
            room("second", 5, 10, RoomKind::Free, 0.0),
        ];
        let chosen = select_room(&rooms, 0.0).unwrap();
        assert_eq!(chosen.id, "first");
    }

    #[test]
    fn no_qualifying_room_is_none() {
        let rooms = vec![
            room("full", 10, 10, RoomKind::Free, 0.0),
            room("paid", 2, 10, RoomKind::Paid, 5.0),
        ];
        assert!(select_room(&rooms, 1.0).is_none());
        assert!(select_room(&[], 100.0).is_none());
    }
}
