//! Session state machine: room hunting, match play, and cleanup.
//!
//! The session cycles between two phases. Out of a match it lists
//! rooms, picks one, and joins. In a match it polls state once per
//! tick, feeds the snapshot through the decision engine, submits the
//! chosen action, and folds the action's outcome back into region
//! learning. Region memory survives across matches in the same
//! process; everything else resets when a match ends.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use royale_client::{ApiClient, parse_outcome, parse_snapshot};
use royale_core::{RegionMemory, decide, post_kill_actions, select_room};
use royale_types::{Action, MatchStatus, RegionEvent, WorldSnapshot};

use crate::error::RunnerError;

/// Backoff step per consecutive failure, in seconds.
const BACKOFF_STEP_SECS: u64 = 5;

/// Backoff ceiling, in seconds.
const BACKOFF_MAX_SECS: u64 = 30;

/// One agent's lifetime against the game service.
pub struct Session {
    client: ApiClient,
    memory: RegionMemory,
    world: WorldSnapshot,
    room_id: Option<String>,
    match_id: Option<String>,
    /// Follow-up actions queued ahead of the decision engine
    /// (loot-then-reload after a confirmed kill).
    followups: VecDeque<Action>,
    /// Region whose explore move still needs a zone-safety check on
    /// the next snapshot.
    zone_check: Option<String>,
    error_streak: u32,
    matches_played: u32,
    total_kills: u32,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Create a session with fresh state and empty region memory.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            memory: RegionMemory::default(),
            world: WorldSnapshot::default(),
            room_id: None,
            match_id: None,
            followups: VecDeque::new(),
            zone_check: None,
            error_streak: 0,
            matches_played: 0,
            total_kills: 0,
            started_at: Utc::now(),
        }
    }

    /// Advance the session by one tick: join a room if idle, otherwise
    /// play one decision cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a service call fails. The session's
    /// in-memory state is unchanged by a failed call, so the caller can
    /// back off and retry.
    pub async fn step(&mut self) -> Result<(), RunnerError> {
        let result = if self.match_id.is_some() {
            self.play_tick().await
        } else {
            self.enter_room().await
        };
        if result.is_ok() {
            self.error_streak = 0;
        }
        result
    }

    /// Register a failed step and return how long to back off before
    /// the next attempt. Linear in the failure streak, capped.
    pub fn record_failure(&mut self) -> std::time::Duration {
        self.error_streak = self.error_streak.saturating_add(1);
        let secs = u64::from(self.error_streak)
            .saturating_mul(BACKOFF_STEP_SECS)
            .min(BACKOFF_MAX_SECS);
        std::time::Duration::from_secs(secs)
    }

    /// Log the lifetime totals. Called once on shutdown.
    pub fn log_summary(&self) {
        let uptime_secs = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds();
        info!(
            matches_played = self.matches_played,
            total_kills = self.total_kills,
            uptime_secs = uptime_secs,
            regions = ?self.memory.summary(),
            "session summary"
        );
    }

    // -- Room phase --------------------------------------------------------

    /// Find and join a room. Leaves the session idle if nothing is
    /// joinable right now; the next tick retries.
    async fn enter_room(&mut self) -> Result<(), RunnerError> {
        let balance = match self.client.get_balance().await {
            Ok(balance) => balance,
            Err(e) => {
                if e.is_auth_failure() {
                    return Err(e.into());
                }
                debug!(error = %e, "balance fetch failed, assuming zero");
                0.0
            }
        };

        let rooms = self.client.list_rooms().await?;
        let Some(room) = select_room(&rooms, balance) else {
            info!(rooms = rooms.len(), balance = balance, "no joinable room");
            return Ok(());
        };

        let room_id = room.id.clone();
        let match_id = self.client.join_room(&room_id).await?;
        info!(room_id = room_id, match_id = match_id, "joined room");

        self.room_id = Some(room_id);
        self.match_id = Some(match_id);
        self.world = WorldSnapshot::default();
        self.followups.clear();
        self.zone_check = None;
        Ok(())
    }

    // -- Match phase -------------------------------------------------------

    /// One full decision cycle: poll state, decide, act, learn.
    async fn play_tick(&mut self) -> Result<(), RunnerError> {
        let Some(match_id) = self.match_id.clone() else {
            return Ok(());
        };

        let raw = self.client.get_state(&match_id).await?;
        let prev_kills = self.world.kills;
        let locked_target = self.world.target_id.clone();
        self.world = parse_snapshot(&raw, &self.world);

        self.resolve_zone_check();
        self.detect_kills(prev_kills, locked_target.as_deref());

        if self.match_is_over() {
            self.finish_match().await;
            return Ok(());
        }

        let action = self
            .followups
            .pop_front()
            .unwrap_or_else(|| decide(&mut self.world, &self.memory));
        debug!(
            tick = self.world.tick,
            hp = self.world.hp,
            region = self.world.current_region,
            action = ?action,
            "decided"
        );

        let result = self.client.send_action(&match_id, &action).await?;
        self.apply_outcome(&action, &result);
        Ok(())
    }

    /// Settle the pending zone-safety check from the previous tick's
    /// explore move. Being caught outside the safe zone marks the
    /// explored region as dangerous.
    fn resolve_zone_check(&mut self) {
        let Some(region) = self.zone_check.take() else {
            return;
        };
        if !self.world.zone.is_safe {
            self.memory.record_event(&region, RegionEvent::ZoneCaught);
        }
    }

    /// Credit kills that landed since the last snapshot. A confirmed
    /// kill rewards the current region and queues loot-then-reload
    /// follow-ups for the target we were attacking.
    fn detect_kills(&mut self, prev_kills: u32, locked_target: Option<&str>) {
        if self.world.kills <= prev_kills {
            return;
        }
        info!(
            kills = self.world.kills,
            region = self.world.current_region,
            "kill confirmed"
        );
        self.memory
            .record_event(&self.world.current_region, RegionEvent::Kill);
        if let Some(target) = locked_target {
            self.followups.extend(post_kill_actions(target));
            self.world.target_id = None;
        }
    }

    /// Whether the current snapshot marks the end of the match.
    fn match_is_over(&self) -> bool {
        self.world.status != MatchStatus::Active
            || self.world.players_alive <= 1
            || self.world.hp <= 0.0
    }

    /// Leave the room, log the match result, and reset per-match state.
    /// Region memory persists.
    async fn finish_match(&mut self) {
        self.matches_played = self.matches_played.saturating_add(1);
        self.total_kills = self.total_kills.saturating_add(self.world.kills);
        info!(
            status = ?self.world.status,
            kills = self.world.kills,
            ticks = self.world.tick,
            players_alive = self.world.players_alive,
            regions = ?self.memory.summary(),
            "match over"
        );

        if let Some(room_id) = self.room_id.take()
            && let Err(e) = self.client.leave_room(&room_id).await
        {
            warn!(room_id = room_id, error = %e, "leave failed, moving on");
        }

        self.match_id = None;
        self.world = WorldSnapshot::default();
        self.followups.clear();
        self.zone_check = None;
    }

    /// Fold an action's result payload back into the snapshot and
    /// region memory.
    fn apply_outcome(&mut self, action: &Action, result: &serde_json::Value) {
        let outcome = parse_outcome(result);
        let region = self.world.current_region.clone();

        if let Some(weapon) = outcome.weapon_acquired {
            info!(weapon = weapon.name, tier = ?weapon.tier, "weapon acquired");
            if weapon.tier.is_high_tier() {
                self.memory.record_event(&region, RegionEvent::HighTierWeapon);
            }
            self.world.weapon = Some(weapon);
        }

        if outcome.ambushed {
            self.memory.record_event(&region, RegionEvent::Ambush);
        }

        if let Action::MoveToRegion { region: target } = action {
            self.memory.record_explore(target, outcome.items_found);
            self.zone_check = Some(target.clone());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_session() -> Session {
        let client = ApiClient::new(
            "http://localhost:0",
            "test-key",
            "test-agent",
            Duration::from_secs(1),
        )
        .unwrap();
        Session::new(client)
    }

    #[test]
    fn backoff_grows_linearly_then_caps() {
        let mut session = test_session();
        assert_eq!(session.record_failure(), Duration::from_secs(5));
        assert_eq!(session.record_failure(), Duration::from_secs(10));
        for _ in 0..10 {
            session.record_failure();
        }
        assert_eq!(session.record_failure(), Duration::from_secs(30));
    }

    #[test]
    fn kill_detection_rewards_region_and_queues_followups() {
        let mut session = test_session();
        session.world.current_region = "north".to_owned();
        session.world.kills = 1;

        session.detect_kills(0, Some("e7"));

        assert!(session.memory.score("north") > 1.0);
        assert_eq!(
            session.followups.pop_front(),
            Some(Action::LootEnemy {
                enemy_id: "e7".to_owned()
            })
        );
        assert_eq!(session.followups.pop_front(), Some(Action::Reload));
        assert!(session.world.target_id.is_none());
    }

    #[test]
    fn no_kill_means_no_followups() {
        let mut session = test_session();
        session.world.kills = 2;
        session.detect_kills(2, Some("e7"));
        assert!(session.followups.is_empty());
    }

    #[test]
    fn zone_check_penalizes_unsafe_arrivals_only() {
        let mut session = test_session();

        session.zone_check = Some("east".to_owned());
        session.world.zone.is_safe = false;
        session.resolve_zone_check();
        assert!(session.memory.score("east") < 1.0);
        assert!(session.zone_check.is_none());

        session.zone_check = Some("west".to_owned());
        session.world.zone.is_safe = true;
        session.resolve_zone_check();
        assert!((session.memory.score("west") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn match_end_conditions() {
        let mut session = test_session();
        session.world.players_alive = 5;
        assert!(!session.match_is_over());

        session.world.players_alive = 1;
        assert!(session.match_is_over());

        session.world.players_alive = 5;
        session.world.hp = 0.0;
        assert!(session.match_is_over());

        session.world.hp = 50.0;
        session.world.status = MatchStatus::Dead;
        assert!(session.match_is_over());
    }

    #[test]
    fn explore_outcome_records_visit_and_arms_zone_check() {
        let mut session = test_session();
        let action = Action::MoveToRegion {
            region: "south".to_owned(),
        };
        session.apply_outcome(&action, &serde_json::json!({"items_found": 2}));

        assert_eq!(session.zone_check.as_deref(), Some("south"));
        // Loot found keeps the region at its baseline score.
        assert!((session.memory.score("south") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn high_tier_pickup_rewards_the_current_region() {
        let mut session = test_session();
        session.world.current_region = "central".to_owned();
        let result = serde_json::json!({
            "weapon_acquired": {"name": "railgun", "dps": 50, "tier": "legendary"}
        });
        session.apply_outcome(&Action::Patrol, &result);

        assert!(session.memory.score("central") > 1.0);
        assert_eq!(session.world.weapon.unwrap().name, "railgun");
    }

    #[test]
    fn common_pickup_updates_weapon_without_reward() {
        let mut session = test_session();
        session.world.current_region = "central".to_owned();
        let result = serde_json::json!({
            "weapon_acquired": {"name": "pipe", "dps": 8, "tier": "common"}
        });
        session.apply_outcome(&Action::Patrol, &result);

        assert!((session.memory.score("central") - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.world.weapon.unwrap().name, "pipe");
    }
}
