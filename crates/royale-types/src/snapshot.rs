//! The world snapshot delivered to the decision engine each tick.
//!
//! A [`WorldSnapshot`] is rebuilt from every state poll and owned by the
//! driving loop for that tick. The engine only reads it, except for the
//! transient target-lock field which it may write back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Enemy, LootEntry, Weapon, Zone};
use crate::enums::MatchStatus;

/// Heal items ranked from strongest to weakest.
///
/// `best_heal` walks this list and returns the first entry present in
/// the inventory, so the agent always burns its strongest option.
pub const HEAL_PRIORITY: &[&str] = &[
    "mega_shield",
    "large_medkit",
    "medkit",
    "bandage",
    "small_heal",
];

/// Everything the agent knows about the world on one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Current health.
    pub hp: f64,
    /// Maximum health.
    pub max_hp: f64,
    /// Account balance, used for paid-room affordability.
    pub balance: f64,
    /// Kills scored so far this match.
    pub kills: u32,
    /// Currently held weapon, if any.
    pub weapon: Option<Weapon>,
    /// Inventory as item-name to count.
    pub inventory: BTreeMap<String, u32>,
    /// Coarse map region the agent currently stands in.
    pub current_region: String,
    /// Zone measurements.
    pub zone: Zone,
    /// Overall visibility in `[0, 1]`; 1.0 is full sight.
    pub vision_modifier: f64,
    /// Enemies currently visible.
    pub enemies: Vec<Enemy>,
    /// Loot items within pickup reach.
    pub loot_nearby: Vec<LootEntry>,
    /// Weapons lying nearby.
    pub weapons_nearby: Vec<Weapon>,
    /// Players still alive in the match.
    pub players_alive: u32,
    /// Identifier of the current match.
    pub match_id: String,
    /// Monotonically increasing tick counter.
    pub tick: u64,
    /// Match lifecycle state as last reported.
    pub status: MatchStatus,
    /// Transient target lock written by the engine; cleared when the
    /// engine refuses a chase or a new match starts.
    pub target_id: Option<String>,
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            hp: 100.0,
            max_hp: 100.0,
            balance: 0.0,
            kills: 0,
            weapon: None,
            inventory: BTreeMap::new(),
            current_region: String::new(),
            zone: Zone::default(),
            vision_modifier: 1.0,
            enemies: Vec::new(),
            loot_nearby: Vec::new(),
            weapons_nearby: Vec::new(),
            players_alive: 0,
            match_id: String::new(),
            tick: 0,
            status: MatchStatus::Active,
            target_id: None,
        }
    }
}

impl WorldSnapshot {
    /// Health as a percentage of maximum; 0 when `max_hp` is 0.
    #[must_use]
    pub fn hp_pct(&self) -> f64 {
        if self.max_hp > 0.0 {
            self.hp / self.max_hp * 100.0
        } else {
            0.0
        }
    }

    /// The strongest heal item currently in inventory, if any.
    #[must_use]
    pub fn best_heal(&self) -> Option<&'static str> {
        HEAL_PRIORITY
            .iter()
            .copied()
            .find(|item| self.inventory.get(*item).copied().unwrap_or(0) > 0)
    }
}
