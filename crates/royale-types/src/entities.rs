//! Per-tick entity snapshots.
//!
//! These are value types rebuilt from every state poll. An [`Enemy`]
//! observed on tick N and tick N+1 are two independent values that
//! happen to share an id string; nothing here holds references into
//! previous ticks.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponTier;

/// Minimum relative score improvement for a weapon swap to be worth it.
const UPGRADE_THRESHOLD_PCT: f64 = 0.15;

// ---------------------------------------------------------------------------
// Weapon
// ---------------------------------------------------------------------------

/// A weapon, either held by the agent or lying on the ground nearby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name; also the key used in `move_to_weapon` actions.
    pub name: String,
    /// Damage per second.
    pub dps: f64,
    /// Hit accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// Effective range (opaque distance units).
    pub range: f64,
    /// Rarity tier.
    pub tier: WeaponTier,
}

impl Weapon {
    /// Derived quality score: `dps * accuracy * range * tier multiplier`.
    ///
    /// Non-negative for any well-formed weapon, since every factor is.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.dps * self.accuracy * self.range * self.tier.multiplier()
    }

    /// Whether picking this weapon up is a meaningful upgrade over the
    /// currently held one.
    ///
    /// Anything beats empty hands. Against a held weapon the relative
    /// score gain must be at least 15%. A held weapon scoring zero or
    /// below is beaten by any positive score (the relative rule would
    /// divide by zero there).
    #[must_use]
    pub fn is_upgrade_over(&self, other: Option<&Self>) -> bool {
        let Some(other) = other else {
            return true;
        };
        let other_score = other.score();
        if other_score <= 0.0 {
            return self.score() > 0.0;
        }
        (self.score() - other_score) / other_score >= UPGRADE_THRESHOLD_PCT
    }
}

// ---------------------------------------------------------------------------
// Enemy
// ---------------------------------------------------------------------------

/// A visible enemy player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Server-issued identifier, used to match the same enemy across ticks.
    pub id: String,
    /// Current health.
    pub hp: f64,
    /// Maximum health.
    pub max_hp: f64,
    /// Damage per second this enemy can deal.
    pub dps: f64,
    /// Distance from the agent (opaque positive scalar).
    pub distance: f64,
    /// Whether the enemy currently stands inside the danger zone.
    pub in_zone: bool,
}

impl Enemy {
    /// Health as a percentage of maximum; 0 when `max_hp` is 0.
    #[must_use]
    pub fn hp_pct(&self) -> f64 {
        if self.max_hp > 0.0 {
            self.hp / self.max_hp * 100.0
        } else {
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

/// The shrinking danger-zone measurements for the agent.
///
/// All fields are externally supplied readings, not derived values. The
/// defaults describe a comfortably safe agent and double as the
/// baseline when the service omits zone data on the first tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Agent's distance to the safe boundary.
    pub distance: f64,
    /// Seconds until the next shrink.
    pub shrink_timer: f64,
    /// Directional hint toward safety, when the service provides one.
    pub direction: Option<String>,
    /// Whether the agent currently stands inside the safe area.
    pub is_safe: bool,
    /// Damage per second dealt to anyone caught outside.
    pub damage_per_sec: f64,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            distance: 999.0,
            shrink_timer: 999.0,
            direction: None,
            is_safe: true,
            damage_per_sec: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Loot
// ---------------------------------------------------------------------------

/// A loot item lying near the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEntry {
    /// Server-issued identifier, used in `pick_loot` actions.
    pub id: String,
    /// Item name; also the inventory key.
    pub item: String,
}
