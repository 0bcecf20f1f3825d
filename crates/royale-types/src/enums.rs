//! Enumeration types for the royale agent.
//!
//! All of these are closed sets: the game service may send labels we
//! have never seen, and every `from_label` constructor documents what
//! happens to the unknowns rather than failing the tick.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Weapon tiers
// ---------------------------------------------------------------------------

/// Rarity class of a weapon, ordered from worst to best.
///
/// The tier feeds a fixed multiplier into the weapon score. Ordering is
/// derived so `Epic > Rare` holds structurally, not just numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponTier {
    /// No weapon at all -- bare hands.
    Fists,
    /// Baseline weapon tier.
    Common,
    /// Slightly above baseline.
    Uncommon,
    /// Mid-tier.
    Rare,
    /// High tier; finding one is worth remembering about a region.
    Epic,
    /// Best tier in the game.
    Legendary,
}

impl WeaponTier {
    /// Fixed scoring multiplier for this tier.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Fists => 0.3,
            Self::Common => 1.0,
            Self::Uncommon => 1.2,
            Self::Rare => 1.5,
            Self::Epic => 2.2,
            Self::Legendary => 3.0,
        }
    }

    /// Whether finding a weapon of this tier counts as a high-tier find
    /// for region scoring.
    #[must_use]
    pub const fn is_high_tier(self) -> bool {
        matches!(self, Self::Epic | Self::Legendary)
    }

    /// Parse a tier label from the wire, case-insensitively.
    ///
    /// Unknown labels fall back to [`WeaponTier::Common`], which carries
    /// the neutral 1.0 multiplier.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "fists" => Self::Fists,
            "uncommon" => Self::Uncommon,
            "rare" => Self::Rare,
            "epic" => Self::Epic,
            "legendary" => Self::Legendary,
            _ => Self::Common,
        }
    }
}

// ---------------------------------------------------------------------------
// Match status
// ---------------------------------------------------------------------------

/// Coarse lifecycle state of the current match, as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// The match is running and the agent is alive.
    Active,
    /// The match has concluded.
    Finished,
    /// The agent has been eliminated.
    Dead,
}

impl MatchStatus {
    /// Map a raw status label onto the typed lifecycle state.
    ///
    /// The service uses several spellings for "over"; anything
    /// unrecognized is treated as an active match so a garbled status
    /// field never ends a session by itself.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "finished" | "ended" | "game_over" => Self::Finished,
            "dead" => Self::Dead,
            _ => Self::Active,
        }
    }
}

// ---------------------------------------------------------------------------
// Region events
// ---------------------------------------------------------------------------

/// An outcome event attributed to a map region, used to adjust that
/// region's learned desirability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionEvent {
    /// An epic or legendary weapon was acquired in the region.
    HighTierWeapon,
    /// An enemy was killed in the region.
    Kill,
    /// The shrinking zone caught the agent while exploring the region.
    ZoneCaught,
    /// The agent was ambushed in the region.
    Ambush,
}

impl RegionEvent {
    /// Parse an event label from collaborator feedback.
    ///
    /// Unknown labels return `None`, which makes unknown event kinds
    /// a no-op for region scoring.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "high_tier_weapon" => Some(Self::HighTierWeapon),
            "kill" => Some(Self::Kill),
            "zone_caught" | "zone_prone" => Some(Self::ZoneCaught),
            "ambush" | "ambushed" => Some(Self::Ambush),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Room kinds
// ---------------------------------------------------------------------------

/// Whether a lobby room charges an entry fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// Free to join.
    Free,
    /// Requires `entry_cost` to be covered by the agent's balance.
    Paid,
}

impl RoomKind {
    /// Parse a room type label; anything that is not `"paid"` is free.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("paid") {
            Self::Paid
        } else {
            Self::Free
        }
    }
}
