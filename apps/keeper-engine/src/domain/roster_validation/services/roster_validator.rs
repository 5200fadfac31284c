//! Roster Validator
//!
//! Gates submission of a keeper worksheet. Checks never mutate their inputs
//! and always report every issue they find rather than stopping at the
//! first.

use std::collections::{HashMap, HashSet};

use crate::domain::cap_fees::{ActiveRoster, RosterSummary};
use crate::domain::keeper_rounds::{KeeperDecision, Player, RosterEntry};
use crate::domain::roster_validation::value_objects::{
    RosterIssue, RosterLimits, RosterValidation,
};
use crate::domain::shared::PlayerId;

/// Validates worksheets against a league's roster limits.
#[derive(Debug, Clone, Copy)]
pub struct RosterValidator {
    limits: RosterLimits,
}

impl RosterValidator {
    /// Create a validator for the given limits.
    #[must_use]
    pub const fn new(limits: RosterLimits) -> Self {
        Self { limits }
    }

    /// Structural and eligibility checks on the worksheet and, in season,
    /// the active roster.
    #[must_use]
    pub fn validate_roster(
        &self,
        entries: &[RosterEntry],
        players: &HashMap<PlayerId, Player>,
        active_roster: Option<&ActiveRoster>,
    ) -> RosterValidation {
        let mut result = RosterValidation::success();

        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(&entry.player_id) {
                result.add_issue(
                    RosterIssue::error(
                        "DUPLICATE_ENTRY",
                        format!("{} appears more than once on the worksheet", entry.player_id),
                    )
                    .with_player(&entry.player_id),
                );
            }

            let Some(player) = players.get(&entry.player_id) else {
                result.add_issue(
                    RosterIssue::error(
                        "UNKNOWN_PLAYER",
                        format!("{} is not in the player pool", entry.player_id),
                    )
                    .with_player(&entry.player_id),
                );
                continue;
            };

            if let Some(issue) = Self::eligibility_issue(entry.decision, player) {
                result.add_issue(issue);
            }
        }

        let keepers = count(entries, KeeperDecision::Keep);
        let redshirts = count(entries, KeeperDecision::Redshirt);

        if keepers > self.limits.max_keepers {
            result.add_issue(
                RosterIssue::error(
                    "KEEPER_LIMIT_EXCEEDED",
                    format!(
                        "Too many keepers: {keepers} > {}",
                        self.limits.max_keepers
                    ),
                )
                .with_observed(keepers)
                .with_limit(self.limits.max_keepers),
            );
        }

        if keepers == 0 && redshirts == 0 {
            result.add_issue(RosterIssue::warning(
                "NO_KEEPERS",
                "No keepers or redshirts selected",
            ));
        }

        if let Some(roster) = active_roster {
            result.merge(self.validate_active_roster(roster));
            result.merge(Self::validate_activations(entries, roster));
            result.merge(Self::validate_positions(players, roster));
        }

        result
    }

    /// Only players redshirted on this worksheet can be activated.
    #[must_use]
    pub fn validate_activations(
        entries: &[RosterEntry],
        roster: &ActiveRoster,
    ) -> RosterValidation {
        let redshirts: HashSet<&PlayerId> = entries
            .iter()
            .filter(|e| e.decision == KeeperDecision::Redshirt)
            .map(|e| &e.player_id)
            .collect();

        let issues = roster
            .activations()
            .into_iter()
            .filter(|id| !redshirts.contains(id))
            .map(|id| {
                RosterIssue::error(
                    "ACTIVATION_NOT_REDSHIRT",
                    format!("{id} is listed as an activated redshirt but is not redshirted"),
                )
                .with_player(id)
            })
            .collect();
        RosterValidation::from_issues(issues)
    }

    /// Players in active slots should list at least one position.
    #[must_use]
    pub fn validate_positions(
        players: &HashMap<PlayerId, Player>,
        roster: &ActiveRoster,
    ) -> RosterValidation {
        let issues = roster
            .active
            .iter()
            .filter_map(|id| players.get(id))
            .filter(|p| p.positions.is_empty())
            .map(|p| {
                RosterIssue::warning(
                    "POSITION_UNLISTED",
                    format!("{} holds an active slot without a listed position", p.id),
                )
                .with_player(&p.id)
            })
            .collect();
        RosterValidation::from_issues(issues)
    }

    /// Active and injured-reserve size limits.
    #[must_use]
    pub fn validate_active_roster(&self, roster: &ActiveRoster) -> RosterValidation {
        let mut result = RosterValidation::success();

        let active = len_u32(roster.active.len());
        if active > self.limits.max_active {
            result.add_issue(
                RosterIssue::error(
                    "ACTIVE_ROSTER_EXCEEDED",
                    format!("Active roster too large: {active} > {}", self.limits.max_active),
                )
                .with_observed(active)
                .with_limit(self.limits.max_active),
            );
        }

        let injured = len_u32(roster.injured_reserve.len());
        if injured > self.limits.max_injured_reserve {
            result.add_issue(
                RosterIssue::error(
                    "INJURED_RESERVE_EXCEEDED",
                    format!(
                        "Injured reserve too large: {injured} > {}",
                        self.limits.max_injured_reserve
                    ),
                )
                .with_observed(injured)
                .with_limit(self.limits.max_injured_reserve),
            );
        }

        result
    }

    /// Keepers the resolver could not place need manual resolution.
    #[must_use]
    pub fn validate_resolution(entries: &[RosterEntry]) -> RosterValidation {
        let issues = entries
            .iter()
            .filter(|e| e.is_overflow())
            .map(|e| {
                let round = e.keeper_round().map_or(0, |r| r.number());
                RosterIssue::error(
                    "KEEPER_ROUND_OVERFLOW",
                    format!(
                        "{} has no open keeper round left; reorder priorities or drop a keeper",
                        e.player_id
                    ),
                )
                .with_player(&e.player_id)
                .with_observed(round)
            })
            .collect();
        RosterValidation::from_issues(issues)
    }

    /// Cap checks on a computed summary.
    ///
    /// Without aprons the effective cap is a hard ceiling. With aprons,
    /// going over the second apron is allowed and charged, so it only warns.
    #[must_use]
    pub fn validate_summary(summary: &RosterSummary, aprons_enabled: bool) -> RosterValidation {
        let mut result = RosterValidation::success();
        let cap = &summary.cap;

        if aprons_enabled {
            if cap.over_second_apron {
                result.add_issue(
                    RosterIssue::warning(
                        "OVER_SECOND_APRON",
                        format!(
                            "Over the second apron by {}M; penalty dues apply",
                            cap.over_second_apron_by_m
                        ),
                    )
                    .with_observed(cap.cap_used),
                );
            }
        } else if cap.cap_used > cap.cap_effective {
            result.add_issue(
                RosterIssue::error(
                    "OVER_HARD_CAP",
                    format!(
                        "Cap usage {} exceeds the cap of {}",
                        cap.cap_used, cap.cap_effective
                    ),
                )
                .with_observed(cap.cap_used)
                .with_limit(cap.cap_effective),
            );
        }

        result
    }

    fn eligibility_issue(decision: KeeperDecision, player: &Player) -> Option<RosterIssue> {
        match decision {
            KeeperDecision::Redshirt if !player.can_redshirt() => Some(
                RosterIssue::error(
                    "REDSHIRT_INELIGIBLE",
                    format!("{} is neither a rookie nor redshirt-eligible", player.id),
                )
                .with_player(&player.id),
            ),
            KeeperDecision::IntStash if !player.can_int_stash() => Some(
                RosterIssue::error(
                    "INT_STASH_INELIGIBLE",
                    format!(
                        "{} is neither an international stash nor stash-eligible",
                        player.id
                    ),
                )
                .with_player(&player.id),
            ),
            _ => None,
        }
    }
}

fn count(entries: &[RosterEntry], decision: KeeperDecision) -> u32 {
    len_u32(entries.iter().filter(|e| e.decision == decision).count())
}

fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
