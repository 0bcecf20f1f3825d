//! The tagged action sum type submitted to the game service.
//!
//! `decide` returns exactly one [`Action`] per tick. The serialized
//! form is a flat JSON object tagged by an `"action"` field, which is
//! the wire shape the action endpoint expects:
//!
//! ```json
//! {"action": "escape_zone", "direction": "north", "priority": "sprint"}
//! ```

use serde::{Deserialize, Serialize};

/// Movement urgency attached to an escape action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovePriority {
    /// Ordinary movement pace.
    Normal,
    /// Top-priority movement; drop everything and run.
    Sprint,
}

/// One action per tick, plus the two post-kill follow-ups.
///
/// The first seven variants are the possible outputs of `decide`;
/// `LootEnemy` and `Reload` are only ever issued by the driving loop
/// as the ordered post-kill protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Run toward the safe area, optionally healing on the move.
    EscapeZone {
        /// Direction hint toward safety.
        direction: String,
        /// Movement urgency; escapes always sprint.
        priority: MovePriority,
        /// Heal item to consume while running, when health is critical.
        #[serde(skip_serializing_if = "Option::is_none")]
        use_heal: Option<String>,
    },
    /// Consume an inventory item (heals).
    UseItem {
        /// Inventory item name.
        item: String,
    },
    /// Move to and pick up a nearby weapon.
    MoveToWeapon {
        /// Name of the weapon to acquire.
        weapon_name: String,
    },
    /// Attack a selected enemy.
    Attack {
        /// Id of the locked target.
        target_id: String,
    },
    /// Travel to another map region to explore it.
    MoveToRegion {
        /// Destination region label.
        region: String,
    },
    /// Pick up a nearby loot item.
    PickLoot {
        /// Id of the loot entry.
        item_id: String,
    },
    /// Nothing better to do; stay active.
    Patrol,
    /// Post-kill follow-up: loot the defeated enemy.
    LootEnemy {
        /// Id of the defeated enemy.
        enemy_id: String,
    },
    /// Post-kill follow-up: reload before the next fight.
    Reload,
}

impl Action {
    /// Whether this action is an exploration move, for the purpose of
    /// attributing loot-found feedback to the destination region.
    #[must_use]
    pub const fn is_explore(&self) -> bool {
        matches!(self, Self::MoveToRegion { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn actions_serialize_flat_with_action_tag() {
        let action = Action::Attack {
            target_id: "e42".to_owned(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "attack");
        assert_eq!(json["target_id"], "e42");
    }

    #[test]
    fn escape_zone_omits_absent_heal() {
        let plain = Action::EscapeZone {
            direction: "north".to_owned(),
            priority: MovePriority::Sprint,
            use_heal: None,
        };
        let json = serde_json::to_value(&plain).unwrap();
        assert_eq!(json["action"], "escape_zone");
        assert_eq!(json["priority"], "sprint");
        assert!(json.get("use_heal").is_none());

        let healing = Action::EscapeZone {
            direction: "north".to_owned(),
            priority: MovePriority::Sprint,
            use_heal: Some("medkit".to_owned()),
        };
        let json = serde_json::to_value(&healing).unwrap();
        assert_eq!(json["use_heal"], "medkit");
    }

    #[test]
    fn patrol_is_a_bare_tag() {
        let json = serde_json::to_value(Action::Patrol).unwrap();
        assert_eq!(json, serde_json::json!({"action": "patrol"}));
    }

    #[test]
    fn only_region_moves_count_as_explore() {
        let explore = Action::MoveToRegion {
            region: "north".to_owned(),
        };
        assert!(explore.is_explore());
        assert!(!Action::Patrol.is_explore());
        assert!(
            !Action::PickLoot {
                item_id: "l1".to_owned()
            }
            .is_explore()
        );
    }
}
