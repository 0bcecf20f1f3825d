//! Defensive normalization of raw service payloads into typed shapes.
//!
//! The service's field names have drifted across deployments, and
//! snapshots can arrive partially populated. Everything here degrades
//! instead of failing: a missing field falls back to the previous
//! snapshot's value (or a documented baseline on the first tick), an
//! unparseable entity is skipped with a debug log, and the decision
//! core only ever sees well-formed values.

use serde_json::Value;
use tracing::debug;

use royale_types::{
    Enemy, LootEntry, MatchStatus, RoomDescriptor, RoomKind, Weapon, WeaponTier, WorldSnapshot,
};

// ---------------------------------------------------------------------------
// World snapshots
// ---------------------------------------------------------------------------

/// Build the tick's world snapshot from a raw state payload.
///
/// Carries forward the previous snapshot's values for any field the
/// payload omits, except the per-tick entity lists (enemies, loot,
/// nearby weapons), which are rebuilt fresh and empty when absent.
/// The transient target lock survives from the previous snapshot.
#[must_use]
pub fn parse_snapshot(raw: &Value, prev: &WorldSnapshot) -> WorldSnapshot {
    let mut world = prev.clone();

    // Agent vitals may sit under an "agent" object or at the top level.
    let agent = raw.get("agent").unwrap_or(raw);

    world.hp = f64_or(agent, "hp", prev.hp);
    world.max_hp = f64_or(agent, "max_hp", prev.max_hp);
    world.balance = f64_or(agent, "balance", prev.balance);
    world.kills = u32_or(agent, "kills", prev.kills);
    world.tick = agent
        .get("tick")
        .or_else(|| raw.get("tick"))
        .and_then(Value::as_u64)
        .unwrap_or_else(|| prev.tick.saturating_add(1));

    if let Some(region) = agent
        .get("position")
        .and_then(|p| p.get("region"))
        .and_then(Value::as_str)
    {
        world.current_region = region.to_owned();
    }

    if let Some(zone) = raw.get("zone") {
        world.zone.distance = f64_or(zone, "distance_to_safe", prev.zone.distance);
        world.zone.shrink_timer = f64_or(zone, "shrink_timer", prev.zone.shrink_timer);
        world.zone.is_safe = zone
            .get("agent_is_safe")
            .and_then(Value::as_bool)
            .unwrap_or(prev.zone.is_safe);
        world.zone.damage_per_sec = f64_or(zone, "damage_per_sec", prev.zone.damage_per_sec);
        if let Some(direction) = zone.get("safe_direction").and_then(Value::as_str) {
            world.zone.direction = Some(direction.to_owned());
        }
    }

    world.vision_modifier = f64_or(raw, "vision_modifier", prev.vision_modifier);

    if let Some(weapon) = agent.get("weapon")
        && weapon.is_object()
    {
        world.weapon = Some(parse_weapon(weapon));
    }

    if let Some(inventory) = agent.get("inventory") {
        world.inventory = parse_inventory(inventory);
    }

    world.enemies = raw
        .get("visible_enemies")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_enemy).collect())
        .unwrap_or_default();

    world.loot_nearby = raw
        .get("loot_nearby")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_loot).collect())
        .unwrap_or_default();

    world.weapons_nearby = raw
        .get("weapons_nearby")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(parse_weapon).collect())
        .unwrap_or_default();

    world.players_alive = u32_or(raw, "players_alive", prev.players_alive);
    if let Some(match_id) = raw.get("match_id").and_then(Value::as_str) {
        world.match_id = match_id.to_owned();
    }
    world.status = raw
        .get("status")
        .and_then(Value::as_str)
        .map_or(MatchStatus::Active, MatchStatus::from_label);

    world
}

/// Parse a weapon object, defaulting each missing field.
fn parse_weapon(raw: &Value) -> Weapon {
    Weapon {
        name: str_or(raw, "name", "unknown"),
        dps: f64_or(raw, "dps", 0.0),
        accuracy: f64_or(raw, "accuracy", 1.0),
        range: f64_or(raw, "range", 1.0),
        tier: WeaponTier::from_label(&str_or(raw, "tier", "common")),
    }
}

/// Parse one visible enemy; entries without an id are dropped.
fn parse_enemy(raw: &Value) -> Option<Enemy> {
    let id = identifier(raw, &["id"])?;
    Some(Enemy {
        id,
        hp: f64_or(raw, "hp", 100.0),
        max_hp: f64_or(raw, "max_hp", 100.0),
        dps: f64_or(raw, "dps", 10.0),
        distance: f64_or(raw, "distance", 50.0),
        in_zone: raw.get("in_zone").and_then(Value::as_bool).unwrap_or(false),
    })
}

/// Parse one loot entry; entries without an id cannot be picked up
/// and are dropped.
fn parse_loot(raw: &Value) -> Option<LootEntry> {
    let id = identifier(raw, &["id"])?;
    Some(LootEntry {
        id,
        item: str_or(raw, "item", ""),
    })
}

/// Inventory arrives either as a list of `{item, count}` objects or a
/// plain name-to-count map.
fn parse_inventory(raw: &Value) -> std::collections::BTreeMap<String, u32> {
    let mut inventory = std::collections::BTreeMap::new();
    match raw {
        Value::Array(entries) => {
            for entry in entries {
                if let Some(item) = entry.get("item").and_then(Value::as_str) {
                    inventory.insert(item.to_owned(), u32_or(entry, "count", 1));
                }
            }
        }
        Value::Object(map) => {
            for (item, count) in map {
                inventory.insert(
                    item.clone(),
                    count.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0),
                );
            }
        }
        other => debug!(shape = %other, "unrecognized inventory shape"),
    }
    inventory
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// Normalize a room object, accepting the field-name variants the
/// service has used: `id`/`room_id`/`roomId`/`_id`,
/// `current_players`/`players`/`playerCount`/`currentPlayers`,
/// `max_players`/`maxPlayers`/`max`/`capacity`/`size`,
/// `type`/`roomType`/`room_type`, and
/// `entry_cost`/`cost`/`fee`/`price`/`entryCost`.
///
/// Returns `None` for non-objects and objects without any id variant.
#[must_use]
pub fn normalize_room(raw: &Value) -> Option<RoomDescriptor> {
    if !raw.is_object() {
        return None;
    }
    let id = identifier(raw, &["id", "room_id", "roomId", "_id"])?;

    let current_players = first_u32(raw, &["current_players", "players", "playerCount", "currentPlayers"])
        .unwrap_or(0);
    let max_players = first_u32(raw, &["max_players", "maxPlayers", "max", "capacity", "size"])
        .unwrap_or(99);
    let kind = first_str(raw, &["type", "roomType", "room_type"])
        .map_or(RoomKind::Free, |label| RoomKind::from_label(&label));
    let entry_cost = first_f64(raw, &["entry_cost", "cost", "fee", "price", "entryCost"])
        .unwrap_or(0.0);

    Some(RoomDescriptor {
        id,
        current_players,
        max_players,
        kind,
        entry_cost,
    })
}

// ---------------------------------------------------------------------------
// Action outcomes
// ---------------------------------------------------------------------------

/// Feedback extracted from an action submission's result payload,
/// fed back into region learning by the driving loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    /// Weapon granted by a completed `move_to_weapon`.
    pub weapon_acquired: Option<Weapon>,
    /// Items found by an explore move.
    pub items_found: u32,
    /// Whether the action walked into an ambush.
    pub ambushed: bool,
}

/// Extract outcome feedback from an action result payload.
#[must_use]
pub fn parse_outcome(raw: &Value) -> ActionOutcome {
    ActionOutcome {
        weapon_acquired: raw
            .get("weapon_acquired")
            .filter(|w| w.is_object())
            .map(parse_weapon),
        items_found: u32_or(raw, "items_found", 0),
        ambushed: raw.get("ambushed").and_then(Value::as_bool).unwrap_or(false),
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// A numeric or string field read as f64, with a fallback.
fn f64_or(raw: &Value, key: &str, fallback: f64) -> f64 {
    raw.get(key).and_then(Value::as_f64).unwrap_or(fallback)
}

/// A numeric field read as u32, with a fallback.
fn u32_or(raw: &Value, key: &str, fallback: u32) -> u32 {
    raw.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(fallback)
}

/// A string field, with a fallback.
fn str_or(raw: &Value, key: &str, fallback: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_owned()
}

/// An identifier that may be a string or a number, under the first
/// matching key.
fn identifier(raw: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match raw.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// The first present key read as u32.
fn first_u32(raw: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| {
        raw.get(*key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    })
}

/// The first present key read as f64.
fn first_f64(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| raw.get(*key).and_then(Value::as_f64))
}

/// The first present key read as a string.
fn first_str(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_str).map(ToOwned::to_owned))
}
