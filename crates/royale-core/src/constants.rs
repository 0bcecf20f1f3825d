//! Tuning constants for the decision policy.
//!
//! Kept in one place so operators can find and tune them without
//! reading the policy code. Percentages of health are on the 0--100
//! scale the snapshot reports; probabilities are on 0--1.

// ---------------------------------------------------------------------------
// Combat thresholds
// ---------------------------------------------------------------------------

/// Minimum win probability to engage an enemy.
pub const WIN_PROB_ENGAGE: f64 = 0.60;

/// Win probability below which an engaged target would be dropped.
///
/// Deliberately not wired into the priority chain: the lock is only
/// reconsidered when target selection re-runs on the next tick. Kept
/// as the documented other half of the engage/disengage hysteresis
/// pair.
pub const WIN_PROB_DISENGAGE: f64 = 0.55;

/// Only lock targets whose escape probability is at or below this.
pub const ESCAPE_PROB_MAX: f64 = 0.40;

/// Maximum estimated seconds to finish a kill inside the danger zone.
pub const ZONE_CHASE_MAX_SECS: f64 = 3.0;

/// Minimum self-escape probability required for a danger-zone chase.
pub const ZONE_CHASE_ESCAPE_MIN: f64 = 0.75;

/// Damage per second assumed when the agent holds no weapon.
pub const UNARMED_DPS: f64 = 5.0;

// ---------------------------------------------------------------------------
// Weapon hunting
// ---------------------------------------------------------------------------

/// Minimum path-safety estimate for chasing a nearby weapon.
pub const SAFE_PATH_MIN: f64 = 0.65;

// ---------------------------------------------------------------------------
// Health thresholds (percent of max)
// ---------------------------------------------------------------------------

/// Below this, use a heal item when nothing more urgent applies.
pub const HP_USE_HEAL: f64 = 60.0;

/// Below this, healing outranks weapon hunting and combat.
pub const HP_CRITICAL_HEAL: f64 = 35.0;

/// Below this, proximity to the zone boundary forces an escape.
pub const HP_ZONE_ABORT: f64 = 60.0;

/// Below this, bundle a heal into the escape action itself.
pub const HP_HEAL_WHILE_ESCAPING: f64 = 30.0;

// ---------------------------------------------------------------------------
// Inventory limits
// ---------------------------------------------------------------------------

/// Maximum units of any single item type worth carrying.
pub const MAX_HEAL_PER_TYPE: u32 = 3;

// ---------------------------------------------------------------------------
// Region value scores
// ---------------------------------------------------------------------------

/// Score assumed for a region that has never been visited.
pub const RVS_BASE: f64 = 1.0;

/// Regions scoring below this are abandoned while alternatives exist.
pub const RVS_FLOOR: f64 = 0.5;

/// Lower clamp for any region score.
pub const RVS_MIN: f64 = 0.0;

/// Upper clamp for any region score.
pub const RVS_MAX: f64 = 2.0;

/// Reward for acquiring an epic or legendary weapon in a region.
pub const RVS_HIGH_WEAPON: f64 = 0.3;

/// Reward for a kill scored in a region.
pub const RVS_KILL: f64 = 0.2;

/// Penalty applied once when a region has been explored twice with no
/// loot to show for it.
pub const RVS_FAIL_EXPLORE: f64 = -0.3;

/// Penalty for getting caught by the zone while exploring a region.
pub const RVS_ZONE_CAUGHT: f64 = -0.5;

/// Penalty for being ambushed in a region.
pub const RVS_AMBUSH: f64 = -0.2;

/// Explore count at which a loot-less region takes the fail penalty.
pub const FAIL_EXPLORE_THRESHOLD: u32 = 2;

// ---------------------------------------------------------------------------
// Exploration
// ---------------------------------------------------------------------------

/// Candidate regions used before any region has been scored.
pub const DEFAULT_REGIONS: &[&str] = &["central", "north", "south", "east", "west"];

/// Direction hint used when the zone gives none.
pub const FALLBACK_SAFE_DIRECTION: &str = "safe_zone_center";
