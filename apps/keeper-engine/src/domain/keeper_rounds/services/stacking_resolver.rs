//! Stacking Resolver
//!
//! Assigns every kept player a final keeper round.
//!
//! # Algorithm
//!
//! 1. KEEP entries are grouped by base round (undrafted players sit in R).
//! 2. Each group's winner (lowest priority, then insertion order) takes the
//!    group's base round. All winners claim their rounds before any loser is
//!    placed.
//! 3. Groups are processed from round 1 upward. Round-1 losers become
//!    franchise tags and take no slot. Losers in later rounds move to the
//!    next unclaimed round after their base round.
//! 4. A loser with no unclaimed round through R is parked at R and flagged
//!    as overflow for manual resolution.
//!
//! Claiming winners first means a group's footprint depends only on its size
//! and on earlier groups, so reordering priorities inside one group never
//! moves keepers in another.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::keeper_rounds::value_objects::{
    KeeperResolution, ResolutionOutcome, RosterEntry, StackingOutcome,
};
use crate::domain::shared::{Round, RoundSpace};

/// Resolves keeper-round collisions for one team's worksheet.
#[derive(Debug, Clone, Copy)]
pub struct StackingResolver {
    space: RoundSpace,
}

impl StackingResolver {
    /// Create a resolver for a league's round space.
    #[must_use]
    pub const fn new(space: RoundSpace) -> Self {
        Self { space }
    }

    /// Stack all KEEP entries into final rounds.
    ///
    /// Non-KEEP entries pass through with no resolution. Any resolution
    /// already present on the input is discarded and recomputed, so
    /// re-running on a resolved worksheet reproduces the same result.
    #[must_use]
    pub fn stack(&self, entries: &[RosterEntry]) -> StackingOutcome {
        let mut resolved: Vec<RosterEntry> = entries
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.resolution = None;
                entry
            })
            .collect();

        let groups = self.contest_groups(&resolved);
        let mut claimed: BTreeSet<Round> = groups.keys().copied().collect();
        let mut franchise_tags = 0_u32;

        for (&base, members) in &groups {
            let mut contestants = members.iter().copied();

            if let Some(winner) = contestants.next() {
                resolved[winner].resolution = Some(KeeperResolution {
                    round: base,
                    outcome: ResolutionOutcome::AtBaseRound,
                });
            }

            for idx in contestants {
                let resolution = if base.is_first() {
                    franchise_tags += 1;
                    KeeperResolution {
                        round: base,
                        outcome: ResolutionOutcome::FranchiseTag,
                    }
                } else if let Some(open) = self.next_open_round(base, &claimed) {
                    claimed.insert(open);
                    KeeperResolution {
                        round: open,
                        outcome: ResolutionOutcome::Displaced { from: base },
                    }
                } else {
                    tracing::warn!(
                        player_id = %resolved[idx].player_id,
                        base_round = base.number(),
                        rounds = self.space.rounds(),
                        "No open keeper round remains; parking at last round"
                    );
                    KeeperResolution {
                        round: self.space.last(),
                        outcome: ResolutionOutcome::Overflow { from: base },
                    }
                };

                tracing::debug!(
                    player_id = %resolved[idx].player_id,
                    base_round = base.number(),
                    keeper_round = resolution.round.number(),
                    "Contested keeper placed"
                );
                resolved[idx].resolution = Some(resolution);
            }
        }

        StackingOutcome {
            entries: resolved,
            franchise_tags,
        }
    }

    /// KEEP entry indices grouped by effective base round, each group in
    /// contest order.
    fn contest_groups(&self, entries: &[RosterEntry]) -> BTreeMap<Round, Vec<usize>> {
        let mut groups: BTreeMap<Round, Vec<usize>> = BTreeMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            if entry.is_keeper() {
                groups
                    .entry(self.effective_base_round(entry))
                    .or_default()
                    .push(idx);
            }
        }
        for members in groups.values_mut() {
            // Stable: insertion order breaks ties.
            members.sort_by(|&a, &b| entries[a].contest_order(&entries[b]));
        }
        groups
    }

    /// Base round used for grouping: undrafted players and rounds recorded
    /// outside the round space fall back into `[1, R]`.
    #[must_use]
    pub fn effective_base_round(&self, entry: &RosterEntry) -> Round {
        match entry.base_round {
            Some(round) if self.space.contains(round) => round,
            Some(round) => self.space.clamp(u32::from(round.number())),
            None => self.space.last(),
        }
    }

    fn next_open_round(&self, contested: Round, claimed: &BTreeSet<Round>) -> Option<Round> {
        self.space
            .from_round(contested)
            .find(|round| !claimed.contains(round))
    }
}
