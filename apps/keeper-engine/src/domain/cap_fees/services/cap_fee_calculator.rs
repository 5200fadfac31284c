//! Cap Fee Calculator
//!
//! Projects a resolved roster onto cap usage and itemised dues.
//!
//! Apron fees follow a watermark once a season is locked: when previously
//! assessed figures are supplied, the first-apron fee and the second-apron
//! penalty are floored at them, so dropping salary mid-season never refunds
//! dues already owed.

use std::collections::{BTreeSet, HashMap};

use crate::domain::cap_fees::value_objects::{
    ActiveRoster, CapFigures, FeeBreakdown, LeagueCapSettings, LeagueFeeSettings, LockedFees,
    RosterCounts, RosterSummary,
};
use crate::domain::keeper_rounds::{KeeperDecision, Player, RosterEntry};
use crate::domain::shared::{Money, PlayerId};

/// Everything one summary is computed from.
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    /// Resolved worksheet entries.
    pub entries: &'a [RosterEntry],
    /// Player pool keyed by id.
    pub players: &'a HashMap<PlayerId, Player>,
    /// In-season roster; `None` before the season starts.
    pub active_roster: Option<&'a ActiveRoster>,
    /// Net cap adjustment from trades.
    pub trade_delta: Money,
    /// Franchise tags produced by stacking.
    pub franchise_tags: u32,
    /// Apron fees already locked for the season.
    pub locked: Option<&'a LockedFees>,
}

/// Cap and fee calculator for one league's settings.
#[derive(Debug, Clone)]
pub struct CapFeeCalculator {
    cap: LeagueCapSettings,
    fees: LeagueFeeSettings,
}

impl CapFeeCalculator {
    /// Create a calculator from league settings.
    #[must_use]
    pub const fn new(cap: LeagueCapSettings, fees: LeagueFeeSettings) -> Self {
        Self { cap, fees }
    }

    /// Cap settings in use.
    #[must_use]
    pub const fn cap_settings(&self) -> &LeagueCapSettings {
        &self.cap
    }

    /// Compute the roster summary.
    #[must_use]
    pub fn compute_summary(&self, input: &SummaryInput<'_>) -> RosterSummary {
        let counts = Self::count(input);
        let cap = self.cap_figures(input);
        let (fees, fees_locked) = self.fee_breakdown(&counts, &cap, input.locked);

        tracing::debug!(
            cap_used = %cap.cap_used,
            cap_effective = %cap.cap_effective,
            over_second_apron_by_m = cap.over_second_apron_by_m,
            total_fees = %fees.total_fees,
            fees_locked,
            "Roster summary computed"
        );

        RosterSummary {
            counts,
            cap,
            fees,
            fees_locked,
        }
    }

    fn count(input: &SummaryInput<'_>) -> RosterCounts {
        let tally = |decision: KeeperDecision| {
            let n = input
                .entries
                .iter()
                .filter(|e| e.decision == decision)
                .count();
            u32::try_from(n).unwrap_or(u32::MAX)
        };

        let redshirt_activations = input.active_roster.map_or(0, |roster| {
            let activated = roster.activations();
            let n = input
                .entries
                .iter()
                .filter(|e| e.decision == KeeperDecision::Redshirt)
                .map(|e| &e.player_id)
                .collect::<BTreeSet<_>>()
                .intersection(&activated)
                .count();
            u32::try_from(n).unwrap_or(u32::MAX)
        });

        RosterCounts {
            keepers: tally(KeeperDecision::Keep),
            redshirts: tally(KeeperDecision::Redshirt),
            international_stashes: tally(KeeperDecision::IntStash),
            franchise_tags: input.franchise_tags,
            redshirt_activations,
        }
    }

    /// Salary counted toward the cap.
    ///
    /// Before the season the keepers count. In season, active and injured
    /// reserve players count, except redshirts and stashes that have not
    /// been activated.
    #[must_use]
    pub fn cap_used(input: &SummaryInput<'_>) -> Money {
        let counted: BTreeSet<&PlayerId> = match input.active_roster {
            None => input
                .entries
                .iter()
                .filter(|e| e.is_keeper())
                .map(|e| &e.player_id)
                .collect(),
            Some(roster) => {
                let activated = roster.activations();
                let exempt: BTreeSet<&PlayerId> = input
                    .entries
                    .iter()
                    .filter(|e| e.decision.is_cap_exempt() && !activated.contains(&e.player_id))
                    .map(|e| &e.player_id)
                    .collect();
                roster
                    .cap_counted()
                    .into_iter()
                    .filter(|id| !exempt.contains(id))
                    .collect()
            }
        };

        counted
            .into_iter()
            .filter_map(|id| input.players.get(id))
            .map(|player| player.salary)
            .sum()
    }

    fn cap_figures(&self, input: &SummaryInput<'_>) -> CapFigures {
        let cap_used = Self::cap_used(input);
        let cap_base = self.cap.cap_base();
        let cap_effective =
            (cap_base + input.trade_delta).clamp_between(self.cap.floor, self.cap.max);

        let (over_first_apron, over_second_apron, over_second_apron_by_m) =
            if self.cap.aprons_enabled() {
                (
                    cap_used > self.cap.first_apron,
                    cap_used > self.cap.second_apron,
                    cap_used
                        .excess_over(self.cap.second_apron)
                        .whole_millions_ceil(),
                )
            } else {
                (false, false, 0)
            };

        CapFigures {
            cap_used,
            cap_base,
            cap_trade_delta: input.trade_delta,
            cap_effective,
            over_second_apron_by_m,
            over_first_apron,
            over_second_apron,
            over_effective_cap: cap_used > cap_effective,
        }
    }

    fn fee_breakdown(
        &self,
        counts: &RosterCounts,
        cap: &CapFigures,
        locked: Option<&LockedFees>,
    ) -> (FeeBreakdown, bool) {
        let mut first_apron_fee = if cap.over_first_apron {
            self.fees.first_apron_fee
        } else {
            Money::ZERO
        };
        let mut penalty_dues = self.fees.penalty_rate_per_m * cap.over_second_apron_by_m;

        if let Some(locked) = locked {
            first_apron_fee = first_apron_fee.max(locked.first_apron_fee);
            penalty_dues = penalty_dues.max(locked.penalty_dues);
        }

        let fees = FeeBreakdown {
            franchise_tag_dues: self.fees.franchise_tag_fee * counts.franchise_tags,
            redshirt_dues: self.fees.redshirt_fee * counts.redshirts,
            activation_dues: self.fees.redshirt_activation_fee * counts.redshirt_activations,
            first_apron_fee,
            penalty_dues,
            total_fees: Money::ZERO,
        }
        .with_total();

        (fees, locked.is_some())
    }
}
