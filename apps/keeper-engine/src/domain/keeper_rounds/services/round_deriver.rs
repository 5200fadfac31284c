//! Round Deriver
//!
//! Turns last season's draft position into this season's base keeper round.

use std::collections::HashMap;

use crate::domain::keeper_rounds::value_objects::{Player, RosterEntry};
use crate::domain::shared::{PlayerId, Round, RoundSpace};

/// Derives base keeper rounds from prior draft history.
#[derive(Debug, Clone, Copy)]
pub struct RoundDeriver {
    space: RoundSpace,
}

impl RoundDeriver {
    /// Create a deriver for a league's round space.
    #[must_use]
    pub const fn new(space: RoundSpace) -> Self {
        Self { space }
    }

    /// Base keeper round for `player`.
    ///
    /// A kept player costs one round more each season:
    /// `max(1, prior_year_round - 1)`, clamped into the round space.
    /// Undrafted players have no base round.
    #[must_use]
    pub fn base_keeper_round(&self, player: &Player) -> Option<Round> {
        player
            .prior_year_round
            .map(|prior| self.space.clamp(u32::from(prior.number()).saturating_sub(1)))
    }

    /// Round to use when one is required: undrafted players are the
    /// cheapest possible keep and sit in the last round.
    #[must_use]
    pub const fn round_or_default(&self, base: Option<Round>) -> Round {
        match base {
            Some(round) => round,
            None => self.space.last(),
        }
    }

    /// Seed `base_round` on every entry from the player pool.
    ///
    /// Entries whose player is missing from the pool are left without a
    /// base round; the roster validator reports them.
    pub fn seed_base_rounds(
        &self,
        entries: &mut [RosterEntry],
        players: &HashMap<PlayerId, Player>,
    ) {
        for entry in entries.iter_mut() {
            entry.base_round = players
                .get(&entry.player_id)
                .and_then(|player| self.base_keeper_round(player));
        }
    }
}
