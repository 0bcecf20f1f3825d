//! The priority-ordered decision policy.
//!
//! [`decide`] maps one world snapshot to exactly one action. The policy
//! is an ordered chain of guarded evaluators; the first rule whose
//! guard holds produces the action and short-circuits the rest:
//!
//! 1. Zone escape (absolute priority)
//! 2. Critical heal
//! 3. Weapon upgrade
//! 4. Normal heal
//! 5. Target acquisition and combat
//! 6. Explore the best-scoring region
//! 7. Loot
//! 8. Patrol (the chain never falls off the end)
//!
//! The only state `decide` touches beyond its return value is the
//! transient target lock on the snapshot, plus `tracing` diagnostics.
//! The engage threshold gates target selection each tick; there is no
//! separate drop-lock rule -- a lock is simply reconsidered the next
//! time selection runs.

use tracing::{debug, info, warn};

use royale_types::{
    Action, Enemy, LootEntry, MovePriority, Weapon, WorldSnapshot, HEAL_PRIORITY,
};

use crate::constants::{
    DEFAULT_REGIONS, ESCAPE_PROB_MAX, FALLBACK_SAFE_DIRECTION, HP_CRITICAL_HEAL,
    HP_HEAL_WHILE_ESCAPING, HP_USE_HEAL, HP_ZONE_ABORT, MAX_HEAL_PER_TYPE, SAFE_PATH_MIN,
    UNARMED_DPS, WIN_PROB_ENGAGE, ZONE_CHASE_ESCAPE_MIN, ZONE_CHASE_MAX_SECS,
};
use crate::memory::RegionMemory;

/// Positional advantage factor in the win-probability model.
///
/// Placeholder held at 1.0 until cover and elevation signals exist in
/// the snapshot.
const POSITION_ADVANTAGE: f64 = 1.0;

/// Choose the single best action for this tick.
///
/// Always returns an action and never blocks. Writes the transient
/// target lock back onto the snapshot when a target is acquired or a
/// chase is refused.
#[must_use]
pub fn decide(world: &mut WorldSnapshot, memory: &RegionMemory) -> Action {
    if let Some(action) = try_zone_escape(world) {
        return action;
    }
    if let Some(action) = try_critical_heal(world) {
        return action;
    }
    if let Some(action) = try_weapon_upgrade(world) {
        return action;
    }
    if let Some(action) = try_normal_heal(world) {
        return action;
    }
    if let Some(action) = try_combat(world) {
        return action;
    }
    if let Some(action) = try_explore(world, memory) {
        return action;
    }
    if let Some(action) = try_loot(world) {
        return action;
    }
    debug!(tick = world.tick, "no rule fired, patrolling");
    Action::Patrol
}

/// Ordered follow-up actions to issue after a confirmed kill:
/// loot the body, then reload. Not part of [`decide`].
#[must_use]
pub fn post_kill_actions(enemy_id: &str) -> Vec<Action> {
    vec![
        Action::LootEnemy {
            enemy_id: enemy_id.to_owned(),
        },
        Action::Reload,
    ]
}

// ---------------------------------------------------------------------------
// Rule 1: zone escape
// ---------------------------------------------------------------------------

/// The zone forces an escape when any of these hold:
/// the agent is outside the safe area; the boundary is close with a
/// shrink imminent; or health is low enough that even a moderate
/// distance to safety is a gamble.
fn zone_is_critical(world: &WorldSnapshot) -> bool {
    if !world.zone.is_safe {
        return true;
    }
    if world.zone.distance < 50.0 && world.zone.shrink_timer < 10.0 {
        return true;
    }
    world.hp_pct() < HP_ZONE_ABORT && world.zone.distance < 80.0
}

fn try_zone_escape(world: &WorldSnapshot) -> Option<Action> {
    if !zone_is_critical(world) {
        return None;
    }

    warn!(
        distance = world.zone.distance,
        shrink_timer = world.zone.shrink_timer,
        hp_pct = world.hp_pct(),
        "zone critical, escaping"
    );

    // Heal on the run only in extreme danger.
    let use_heal = if world.hp_pct() < HP_HEAL_WHILE_ESCAPING {
        world.best_heal().map(ToOwned::to_owned)
    } else {
        None
    };

    let direction = world
        .zone
        .direction
        .clone()
        .unwrap_or_else(|| FALLBACK_SAFE_DIRECTION.to_owned());

    Some(Action::EscapeZone {
        direction,
        priority: MovePriority::Sprint,
        use_heal,
    })
}

// ---------------------------------------------------------------------------
// Rules 2 and 4: healing
// ---------------------------------------------------------------------------

fn try_critical_heal(world: &WorldSnapshot) -> Option<Action> {
    if world.hp_pct() < HP_CRITICAL_HEAL {
        heal_action(world)
    } else {
        None
    }
}

fn try_normal_heal(world: &WorldSnapshot) -> Option<Action> {
    if world.hp_pct() < HP_USE_HEAL {
        heal_action(world)
    } else {
        None
    }
}

/// Consume the strongest available heal item, if there is one.
fn heal_action(world: &WorldSnapshot) -> Option<Action> {
    let item = world.best_heal()?;
    info!(item = item, hp_pct = world.hp_pct(), "using heal item");
    Some(Action::UseItem {
        item: item.to_owned(),
    })
}

// ---------------------------------------------------------------------------
// Rule 3: weapon upgrade
// ---------------------------------------------------------------------------

/// Step-function estimate of how safely the agent can detour for a
/// weapon, based only on distance to the zone boundary.
fn path_safety(zone_distance: f64) -> f64 {
    if zone_distance > 200.0 {
        0.90
    } else if zone_distance > 100.0 {
        0.75
    } else if zone_distance > 50.0 {
        0.55
    } else {
        0.30
    }
}

/// Whether a nearby weapon is judged to lie inside the imminent
/// shrink trajectory.
fn weapon_in_shrink_trajectory(world: &WorldSnapshot) -> bool {
    world.zone.distance < 40.0 && world.zone.shrink_timer < 8.0
}

/// Best nearby weapon by derived score; first-seen wins ties.
fn best_nearby_weapon(world: &WorldSnapshot) -> Option<&Weapon> {
    let mut best: Option<&Weapon> = None;
    for weapon in &world.weapons_nearby {
        let beats = best.is_none_or(|b| weapon.score() > b.score());
        if beats {
            best = Some(weapon);
        }
    }
    best
}

fn try_weapon_upgrade(world: &WorldSnapshot) -> Option<Action> {
    let candidate = best_nearby_weapon(world)?;
    if !candidate.is_upgrade_over(world.weapon.as_ref()) {
        return None;
    }
    if path_safety(world.zone.distance) < SAFE_PATH_MIN {
        return None;
    }
    if weapon_in_shrink_trajectory(world) {
        return None;
    }

    info!(
        weapon = candidate.name,
        score = candidate.score(),
        "hunting weapon upgrade"
    );
    Some(Action::MoveToWeapon {
        weapon_name: candidate.name.clone(),
    })
}

// ---------------------------------------------------------------------------
// Rule 5: target acquisition and combat
// ---------------------------------------------------------------------------

/// Damage per second the agent can deal; bare hands hit for a nominal
/// [`UNARMED_DPS`].
fn own_dps(world: &WorldSnapshot) -> f64 {
    world.weapon.as_ref().map_or(UNARMED_DPS, |w| w.dps)
}

/// Heuristic probability of winning a fight against `enemy`.
///
/// Relative firepower and health over the enemy's, discounted by
/// distance (beyond 50 units) and squashed through `x / (x + 1)` into
/// `[0, 1]`. Low overall vision attenuates effectiveness against
/// enemies beyond 60 units.
#[must_use]
pub fn win_probability(world: &WorldSnapshot, enemy: &Enemy) -> f64 {
    let mut vision = world.vision_modifier;
    if world.vision_modifier < 0.5 && enemy.distance > 60.0 {
        vision *= 0.6;
    }

    let numerator = own_dps(world) * world.hp * POSITION_ADVANTAGE * vision;
    let denominator = enemy.dps.max(0.1) * enemy.hp.max(0.1) * (enemy.distance / 50.0).max(1.0);
    let raw = numerator / denominator;
    (raw / (raw + 1.0)).clamp(0.0, 1.0)
}

/// Heuristic probability that `enemy` escapes if engaged: nearly dead
/// enemies cannot flee, distant ones usually do.
fn enemy_escape_probability(enemy: &Enemy) -> f64 {
    if enemy.hp_pct() < 25.0 {
        0.10
    } else if enemy.distance > 100.0 {
        0.70
    } else {
        0.35
    }
}

/// Estimated seconds to finish the target at the agent's dps.
fn kill_time(world: &WorldSnapshot, target_hp: f64) -> f64 {
    let dps = own_dps(world);
    if dps > 0.0 { target_hp / dps } else { f64::INFINITY }
}

/// Step-function estimate of the agent's own chance to get back out of
/// the danger zone after a chase.
fn self_escape_probability(zone_distance: f64) -> f64 {
    if zone_distance < 20.0 {
        0.30
    } else if zone_distance < 60.0 {
        0.60
    } else {
        0.85
    }
}

/// Select the best target among visible enemies outside the danger
/// zone.
///
/// Eligibility requires win probability at or above the engage
/// threshold and escape probability at or below the cap. Eligible
/// enemies are ranked by `win_prob * (1 - hp_pct/100) / max(distance, 1)`
/// -- confident, nearly-dead, close targets first. The comparison is
/// strictly greater-than, so ties resolve to the first enemy in
/// iteration order; the enemy list preserves the order the service
/// reported, making the tie-break stable.
fn select_target(world: &WorldSnapshot) -> Option<&Enemy> {
    let mut best: Option<(&Enemy, f64)> = None;

    for enemy in &world.enemies {
        if enemy.in_zone {
            continue;
        }

        let win = win_probability(world, enemy);
        let escape = enemy_escape_probability(enemy);
        if win < WIN_PROB_ENGAGE || escape > ESCAPE_PROB_MAX {
            continue;
        }

        let rank = win * (1.0 - enemy.hp_pct() / 100.0) / enemy.distance.max(1.0);
        let beats = best.is_none_or(|(_, best_rank)| rank > best_rank);
        if beats {
            best = Some((enemy, rank));
        }
    }

    best.map(|(enemy, _)| enemy)
}

fn try_combat(world: &mut WorldSnapshot) -> Option<Action> {
    let target = select_target(world)?;
    let target_id = target.id.clone();
    let target_hp = target.hp;
    let target_in_zone = target.in_zone;
    let target_win = win_probability(world, target);
    let target_hp_pct = target.hp_pct();

    world.target_id = Some(target_id.clone());

    if target_in_zone {
        let kill_secs = kill_time(world, target_hp);
        let escape = self_escape_probability(world.zone.distance);
        if kill_secs <= ZONE_CHASE_MAX_SECS && escape >= ZONE_CHASE_ESCAPE_MIN {
            info!(
                target_id = target_id,
                kill_secs = kill_secs,
                self_escape = escape,
                "committing to danger-zone chase"
            );
            return Some(Action::Attack { target_id });
        }
        info!(
            target_id = target_id,
            kill_secs = kill_secs,
            self_escape = escape,
            "refusing danger-zone chase, releasing lock"
        );
        world.target_id = None;
        return None;
    }

    info!(
        target_id = target_id,
        win_prob = target_win,
        target_hp_pct = target_hp_pct,
        "attacking target"
    );
    Some(Action::Attack { target_id })
}

// ---------------------------------------------------------------------------
// Rule 6: explore
// ---------------------------------------------------------------------------

fn try_explore(world: &WorldSnapshot, memory: &RegionMemory) -> Option<Action> {
    let known = memory.known_regions();
    let chosen = if known.is_empty() {
        memory.best_region(DEFAULT_REGIONS)?
    } else {
        memory.best_region(&known)?
    };

    if chosen == world.current_region {
        return None;
    }

    info!(region = chosen, "exploring best-scoring region");
    Some(Action::MoveToRegion {
        region: chosen.to_owned(),
    })
}

// ---------------------------------------------------------------------------
// Rule 7: loot
// ---------------------------------------------------------------------------

/// Count of an item already carried.
fn carried(world: &WorldSnapshot, item: &str) -> u32 {
    world.inventory.get(item).copied().unwrap_or(0)
}

/// Pick a loot entry worth grabbing: heal-class items first when
/// health is low, otherwise the first entry not yet at its per-type
/// cap.
fn pick_loot(world: &WorldSnapshot) -> Option<&LootEntry> {
    if world.hp_pct() < HP_USE_HEAL {
        let heal = world.loot_nearby.iter().find(|entry| {
            HEAL_PRIORITY.contains(&entry.item.as_str())
                && carried(world, &entry.item) < MAX_HEAL_PER_TYPE
        });
        if heal.is_some() {
            return heal;
        }
    }

    world
        .loot_nearby
        .iter()
        .find(|entry| carried(world, &entry.item) < MAX_HEAL_PER_TYPE)
}

fn try_loot(world: &WorldSnapshot) -> Option<Action> {
    let entry = pick_loot(world)?;
    info!(item = entry.item, "picking up loot");
    Some(Action::PickLoot {
        item_id: entry.id.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use royale_types::{RegionEvent, WeaponTier, Zone};

    fn weapon(name: &str, dps: f64) -> Weapon {
        Weapon {
            name: name.to_owned(),
            dps,
            accuracy: 1.0,
            range: 1.0,
            tier: WeaponTier::Common,
        }
    }

    fn enemy(id: &str, hp: f64, dps: f64, distance: f64) -> Enemy {
        Enemy {
            id: id.to_owned(),
            hp,
            max_hp: 100.0,
            dps,
            distance,
            in_zone: false,
        }
    }

    /// A calm, healthy baseline: full hp, zone far away, armed,
    /// standing in an averagely scored region with nothing nearby.
    fn calm_world() -> WorldSnapshot {
        WorldSnapshot {
            weapon: Some(weapon("rifle", 20.0)),
            current_region: "central".to_owned(),
            zone: Zone {
                distance: 300.0,
                shrink_timer: 999.0,
                ..Zone::default()
            },
            ..WorldSnapshot::default()
        }
    }

    // -- zone escape -------------------------------------------------------

    #[test]
    fn unsafe_zone_always_escapes() {
        let mut world = calm_world();
        world.zone.is_safe = false;
        world.enemies.push(enemy("e1", 10.0, 5.0, 20.0));
        world.inventory.insert("medkit".to_owned(), 3);

        let action = decide(&mut world, &RegionMemory::new());
        assert!(matches!(action, Action::EscapeZone { .. }));
    }

    #[test]
    fn zone_rule_fires_before_heal_rule() {
        let mut world = calm_world();
        world.hp = 20.0;
        world.zone.distance = 30.0;
        world.zone.shrink_timer = 5.0;
        world.inventory.insert("medkit".to_owned(), 1);

        let action = decide(&mut world, &RegionMemory::new());
        match action {
            Action::EscapeZone { use_heal, priority, .. } => {
                // hp below 30% bundles a heal into the sprint.
                assert_eq!(use_heal.as_deref(), Some("medkit"));
                assert_eq!(priority, MovePriority::Sprint);
            }
            other => panic!("expected escape, got {other:?}"),
        }
    }

    #[test]
    fn low_hp_near_boundary_escapes_without_bundled_heal() {
        let mut world = calm_world();
        world.hp = 50.0;
        world.zone.distance = 70.0;
        world.inventory.insert("bandage".to_owned(), 1);

        let action = decide(&mut world, &RegionMemory::new());
        match action {
            Action::EscapeZone { use_heal, .. } => assert!(use_heal.is_none()),
            other => panic!("expected escape, got {other:?}"),
        }
    }

    #[test]
    fn missing_direction_falls_back_to_center_hint() {
        let mut world = calm_world();
        world.zone.is_safe = false;
        world.zone.direction = None;

        match decide(&mut world, &RegionMemory::new()) {
            Action::EscapeZone { direction, .. } => {
                assert_eq!(direction, FALLBACK_SAFE_DIRECTION);
            }
            other => panic!("expected escape, got {other:?}"),
        }
    }

    // -- healing -----------------------------------------------------------

    #[test]
    fn critical_heal_fires_when_zone_is_calm() {
        let mut world = calm_world();
        world.hp = 30.0;
        world.inventory.insert("bandage".to_owned(), 2);

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::UseItem {
                item: "bandage".to_owned()
            }
        );
    }

    #[test]
    fn normal_heal_fires_below_sixty_percent() {
        let mut world = calm_world();
        world.hp = 50.0;
        world.inventory.insert("medkit".to_owned(), 1);
        // An eligible enemy exists, but healing outranks combat here.
        world.enemies.push(enemy("e1", 20.0, 5.0, 30.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::UseItem {
                item: "medkit".to_owned()
            }
        );
    }

    #[test]
    fn no_heal_items_means_no_heal_action() {
        let mut world = calm_world();
        world.hp = 30.0;

        let action = decide(&mut world, &RegionMemory::new());
        assert!(!matches!(action, Action::UseItem { .. }));
    }

    // -- weapon upgrade ----------------------------------------------------

    #[test]
    fn clear_upgrade_with_safe_path_is_hunted() {
        let mut world = calm_world();
        world.zone.distance = 250.0;
        world.weapons_nearby.push(weapon("better-rifle", 26.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::MoveToWeapon {
                weapon_name: "better-rifle".to_owned()
            }
        );
    }

    #[test]
    fn marginal_upgrade_is_ignored() {
        let mut world = calm_world();
        world.weapons_nearby.push(weapon("sidegrade", 21.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert!(!matches!(action, Action::MoveToWeapon { .. }));
    }

    #[test]
    fn unsafe_path_blocks_the_weapon_hunt() {
        let mut world = calm_world();
        // Path safety at distance 60 is 0.55, under the 0.65 gate, but
        // far enough that no zone rule fires at full health.
        world.zone.distance = 60.0;
        world.weapons_nearby.push(weapon("tempting", 100.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert!(!matches!(action, Action::MoveToWeapon { .. }));
    }

    #[test]
    fn best_of_several_nearby_weapons_is_chosen() {
        let mut world = calm_world();
        world.zone.distance = 250.0;
        world.weapons_nearby.push(weapon("ok", 26.0));
        world.weapons_nearby.push(weapon("great", 40.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::MoveToWeapon {
                weapon_name: "great".to_owned()
            }
        );
    }

    // -- combat ------------------------------------------------------------

    #[test]
    fn eligible_enemy_is_attacked_and_locked() {
        let mut world = calm_world();
        world.enemies.push(enemy("e1", 20.0, 10.0, 30.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::Attack {
                target_id: "e1".to_owned()
            }
        );
        assert_eq!(world.target_id.as_deref(), Some("e1"));
    }

    #[test]
    fn strong_distant_enemy_is_not_engaged() {
        let mut world = calm_world();
        world.enemies.push(enemy("tank", 100.0, 80.0, 150.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert!(!matches!(action, Action::Attack { .. }));
        assert!(world.target_id.is_none());
    }

    #[test]
    fn in_zone_enemies_are_skipped_by_selection() {
        let mut world = calm_world();
        let mut inside = enemy("inside", 10.0, 5.0, 20.0);
        inside.in_zone = true;
        world.enemies.push(inside);

        let action = decide(&mut world, &RegionMemory::new());
        assert!(!matches!(action, Action::Attack { .. }));
    }

    #[test]
    fn ranking_prefers_the_weak_close_target() {
        let mut world = calm_world();
        world.enemies.push(enemy("far-healthy", 60.0, 10.0, 90.0));
        world.enemies.push(enemy("close-weak", 15.0, 10.0, 25.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::Attack {
                target_id: "close-weak".to_owned()
            }
        );
    }

    #[test]
    fn identical_targets_tie_break_to_first_seen() {
        let mut world = calm_world();
        world.enemies.push(enemy("first", 20.0, 10.0, 30.0));
        world.enemies.push(enemy("second", 20.0, 10.0, 30.0));

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::Attack {
                target_id: "first".to_owned()
            }
        );
    }

    #[test]
    fn win_probability_regression_pin() {
        // Symmetric armament: own dps 20 and hp 100 against an enemy
        // at distance 80 with hp 40 and dps 20.
        let world = calm_world();
        let target = enemy("pin", 40.0, 20.0, 80.0);

        let win = win_probability(&world, &target);
        assert!(win >= 0.55 && win <= 0.75, "win_prob out of band: {win}");
    }

    #[test]
    fn low_vision_attenuates_distant_fights_only() {
        let mut world = calm_world();
        let near = enemy("near", 50.0, 10.0, 40.0);
        let far = enemy("far", 50.0, 10.0, 70.0);

        let near_full = win_probability(&world, &near);
        let far_full = win_probability(&world, &far);

        world.vision_modifier = 0.4;
        let near_dim = win_probability(&world, &near);
        let far_dim = win_probability(&world, &far);

        // Both drop with vision, but the distant fight takes the extra
        // 0.6 attenuation on top.
        assert!(near_dim < near_full);
        assert!(far_dim < far_full);
        let near_ratio = near_dim / near_full;
        let far_ratio = far_dim / far_full;
        assert!(far_ratio < near_ratio);
    }

    #[test]
    fn kill_time_defaults_to_unarmed_dps() {
        let mut world = calm_world();
        world.weapon = None;
        let secs = kill_time(&world, 15.0);
        assert!((secs - 3.0).abs() < 1e-9);
    }

    #[test]
    fn self_escape_probability_steps() {
        assert!((self_escape_probability(10.0) - 0.30).abs() < f64::EPSILON);
        assert!((self_escape_probability(40.0) - 0.60).abs() < f64::EPSILON);
        assert!((self_escape_probability(200.0) - 0.85).abs() < f64::EPSILON);
    }

    // -- explore -----------------------------------------------------------

    #[test]
    fn explore_moves_to_the_best_scoring_region() {
        let mut world = calm_world();
        world.current_region = "south".to_owned();

        let mut memory = RegionMemory::new();
        memory.record_event("north", RegionEvent::HighTierWeapon);
        memory.record_event("north", RegionEvent::Kill);
        memory.record_event("south", RegionEvent::ZoneCaught);
        memory.record_event("south", RegionEvent::Ambush);

        let action = decide(&mut world, &memory);
        assert_eq!(
            action,
            Action::MoveToRegion {
                region: "north".to_owned()
            }
        );
    }

    #[test]
    fn empty_memory_explores_the_default_candidates() {
        let mut world = calm_world();
        world.current_region = "somewhere-else".to_owned();

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::MoveToRegion {
                region: "central".to_owned()
            }
        );
    }

    #[test]
    fn already_in_the_best_region_falls_through() {
        let mut world = calm_world();
        // calm_world stands in "central", the first default candidate.
        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(action, Action::Patrol);
    }

    // -- loot --------------------------------------------------------------

    #[test]
    fn hurt_agent_prefers_heal_class_loot() {
        let mut world = calm_world();
        world.hp = 50.0;
        world.loot_nearby.push(LootEntry {
            id: "l1".to_owned(),
            item: "scope".to_owned(),
        });
        world.loot_nearby.push(LootEntry {
            id: "l2".to_owned(),
            item: "bandage".to_owned(),
        });

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::PickLoot {
                item_id: "l2".to_owned()
            }
        );
    }

    #[test]
    fn items_at_the_cap_are_not_picked_up() {
        let mut world = calm_world();
        world.inventory.insert("bandage".to_owned(), MAX_HEAL_PER_TYPE);
        world.loot_nearby.push(LootEntry {
            id: "l1".to_owned(),
            item: "bandage".to_owned(),
        });
        world.loot_nearby.push(LootEntry {
            id: "l2".to_owned(),
            item: "scope".to_owned(),
        });

        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(
            action,
            Action::PickLoot {
                item_id: "l2".to_owned()
            }
        );
    }

    // -- fallback ----------------------------------------------------------

    #[test]
    fn empty_world_patrols_instead_of_deadlocking() {
        let mut world = calm_world();
        let action = decide(&mut world, &RegionMemory::new());
        assert_eq!(action, Action::Patrol);
    }

    #[test]
    fn post_kill_protocol_is_loot_then_reload() {
        let actions = post_kill_actions("victim");
        assert_eq!(
            actions,
            vec![
                Action::LootEnemy {
                    enemy_id: "victim".to_owned()
                },
                Action::Reload,
            ]
        );
    }
}
