//! Learned region desirability scores.
//!
//! [`RegionMemory`] is the agent's only longitudinal state: a bounded
//! score per map region, adjusted from exploration outcomes and combat
//! events, consulted when choosing where to explore next. It lives for
//! one process lifetime and is never persisted.
//!
//! The driving loop owns one instance, mutates it between ticks as
//! outcomes become known, and passes it by reference into every
//! `decide` call. Single writer, single reader, strictly sequential --
//! no locking needed.

use std::collections::BTreeMap;

use tracing::debug;

use royale_types::RegionEvent;

use crate::constants::{
    FAIL_EXPLORE_THRESHOLD, RVS_AMBUSH, RVS_BASE, RVS_FAIL_EXPLORE, RVS_FLOOR, RVS_HIGH_WEAPON,
    RVS_KILL, RVS_MAX, RVS_MIN, RVS_ZONE_CAUGHT,
};

/// Per-region learning state: scores, visit counts, loot totals.
#[derive(Debug, Clone, Default)]
pub struct RegionMemory {
    /// Region -> learned desirability score, clamped to `[RVS_MIN, RVS_MAX]`.
    scores: BTreeMap<String, f64>,
    /// Region -> number of explore visits recorded.
    explores: BTreeMap<String, u32>,
    /// Region -> cumulative loot items found across all visits.
    loot_found: BTreeMap<String, u32>,
}

impl RegionMemory {
    /// Create an empty memory; every region starts at the base score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The learned score for a region; unseen regions score [`RVS_BASE`].
    #[must_use]
    pub fn score(&self, region: &str) -> f64 {
        self.scores.get(region).copied().unwrap_or(RVS_BASE)
    }

    /// Record the outcome of one explore visit.
    ///
    /// `loot_found` is the number of meaningful items turned up by the
    /// visit. A region that has been explored twice with nothing to
    /// show takes the fail penalty -- exactly once, on the visit that
    /// crosses the threshold. The loot counter is cumulative and can
    /// never return to zero, so the threshold is crossed at most once
    /// per region and no extra bookkeeping is needed.
    pub fn record_explore(&mut self, region: &str, loot_found: u32) {
        let visits = self.explores.entry(region.to_owned()).or_insert(0);
        *visits = visits.saturating_add(1);
        let visits = *visits;

        let total_loot = self.loot_found.entry(region.to_owned()).or_insert(0);
        *total_loot = total_loot.saturating_add(loot_found);
        let total_loot = *total_loot;

        if visits == FAIL_EXPLORE_THRESHOLD && total_loot == 0 {
            self.adjust(region, RVS_FAIL_EXPLORE, "repeated empty explores");
        }
    }

    /// Apply the fixed score delta for an outcome event in a region.
    pub fn record_event(&mut self, region: &str, event: RegionEvent) {
        let (delta, reason) = match event {
            RegionEvent::HighTierWeapon => (RVS_HIGH_WEAPON, "high-tier weapon found"),
            RegionEvent::Kill => (RVS_KILL, "kill"),
            RegionEvent::ZoneCaught => (RVS_ZONE_CAUGHT, "caught by zone"),
            RegionEvent::Ambush => (RVS_AMBUSH, "ambushed"),
        };
        self.adjust(region, delta, reason);
    }

    /// Whether a region is still worth visiting (score at or above the floor).
    #[must_use]
    pub fn is_worthwhile(&self, region: &str) -> bool {
        self.score(region) >= RVS_FLOOR
    }

    /// Pick the best region among the candidates.
    ///
    /// Candidates below the floor are filtered out first; if the filter
    /// leaves nothing, the maximum over the unfiltered list is returned
    /// instead, so exploration never stalls merely because every known
    /// region has been exhausted. Ties resolve to the first occurrence
    /// in the candidate list.
    #[must_use]
    pub fn best_region<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Option<&'a str> {
        let worthwhile = self.max_by_score(candidates.iter().filter(|r| {
            self.is_worthwhile(r.as_ref())
        }));
        worthwhile.or_else(|| self.max_by_score(candidates.iter()))
    }

    /// All regions that have a recorded score, for use as explore
    /// candidates once learning has begun.
    #[must_use]
    pub fn known_regions(&self) -> Vec<String> {
        self.scores.keys().cloned().collect()
    }

    /// Rounded scores per region, for end-of-match logging.
    #[must_use]
    pub fn summary(&self) -> BTreeMap<String, f64> {
        self.scores
            .iter()
            .map(|(region, score)| (region.clone(), (score * 100.0).round() / 100.0))
            .collect()
    }

    /// Maximum-scoring candidate; strict-greater comparison keeps the
    /// first occurrence on ties.
    fn max_by_score<'a, S, I>(&self, candidates: I) -> Option<&'a str>
    where
        S: AsRef<str> + 'a,
        I: Iterator<Item = &'a S>,
    {
        let mut best: Option<(&'a str, f64)> = None;
        for candidate in candidates {
            let region = candidate.as_ref();
            let score = self.score(region);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((region, score)),
            }
        }
        best.map(|(region, _)| region)
    }

    /// Apply a score delta, clamping into `[RVS_MIN, RVS_MAX]`.
    fn adjust(&mut self, region: &str, delta: f64, reason: &str) {
        let old = self.score(region);
        let new = (old + delta).clamp(RVS_MIN, RVS_MAX);
        self.scores.insert(region.to_owned(), new);
        debug!(region = region, old = old, new = new, reason = reason, "region score adjusted");
    }
}
