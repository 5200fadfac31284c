//! Keeper worksheet entries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::shared::{PlayerId, Round};

/// What an owner decided to do with a rostered player for the coming season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeeperDecision {
    /// Keep the player at a draft-round cost.
    Keep,
    /// Release the player into the draft pool.
    Drop,
    /// Hold a rookie off the active roster (cap-exempt).
    Redshirt,
    /// Hold an overseas player (cap-exempt).
    IntStash,
}

impl KeeperDecision {
    /// Redshirt and international-stash players do not count toward the cap.
    #[must_use]
    pub const fn is_cap_exempt(self) -> bool {
        matches!(self, Self::Redshirt | Self::IntStash)
    }
}

impl fmt::Display for KeeperDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "KEEP"),
            Self::Drop => write!(f, "DROP"),
            Self::Redshirt => write!(f, "REDSHIRT"),
            Self::IntStash => write!(f, "INT_STASH"),
        }
    }
}

/// How a keeper reached its final round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionOutcome {
    /// Uncontested, or won the contest for its base round.
    AtBaseRound,
    /// Lost a contest and moved to the next open later round.
    Displaced {
        /// Contested base round.
        from: Round,
    },
    /// Lost the round-1 contest; paid for with a franchise tag instead of a slot.
    FranchiseTag,
    /// No open round remained through R; parked at R pending manual review.
    Overflow {
        /// Contested base round.
        from: Round,
    },
}

/// Final keeper round assigned by the stacking resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperResolution {
    /// Final keeper round.
    pub round: Round,
    /// How the round was reached.
    pub outcome: ResolutionOutcome,
}

impl KeeperResolution {
    /// Returns true if this keeper occupies a structural round slot.
    #[must_use]
    pub const fn occupies_slot(&self) -> bool {
        !matches!(
            self.outcome,
            ResolutionOutcome::FranchiseTag | ResolutionOutcome::Overflow { .. }
        )
    }
}

/// One player's line on a team's keeper worksheet for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    /// Player on the worksheet.
    pub player_id: PlayerId,
    /// Owner decision.
    pub decision: KeeperDecision,
    /// Round before conflict resolution (absent for undrafted players).
    #[serde(default)]
    pub base_round: Option<Round>,
    /// Tie-break key among keepers sharing a base round; lower wins.
    #[serde(default)]
    pub priority: Option<u32>,
    /// Resolved keeper round; only present for KEEP after stacking.
    #[serde(default)]
    pub resolution: Option<KeeperResolution>,
}

impl RosterEntry {
    /// Create an unresolved entry.
    #[must_use]
    pub fn new(player_id: impl Into<PlayerId>, decision: KeeperDecision) -> Self {
        Self {
            player_id: player_id.into(),
            decision,
            base_round: None,
            priority: None,
            resolution: None,
        }
    }

    /// Create an unresolved KEEP entry.
    #[must_use]
    pub fn keep(player_id: impl Into<PlayerId>) -> Self {
        Self::new(player_id, KeeperDecision::Keep)
    }

    /// Set the base round.
    #[must_use]
    pub const fn with_base_round(mut self, round: Round) -> Self {
        self.base_round = Some(round);
        self
    }

    /// Set the tie-break priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns true if the owner is keeping this player.
    #[must_use]
    pub fn is_keeper(&self) -> bool {
        self.decision == KeeperDecision::Keep
    }

    /// Final keeper round, when resolved.
    #[must_use]
    pub fn keeper_round(&self) -> Option<Round> {
        self.resolution.map(|r| r.round)
    }

    /// Returns true if resolution turned this keeper into a franchise tag.
    #[must_use]
    pub fn is_franchise_tag(&self) -> bool {
        matches!(
            self.resolution.map(|r| r.outcome),
            Some(ResolutionOutcome::FranchiseTag)
        )
    }

    /// Returns true if resolution ran out of rounds for this keeper.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(
            self.resolution.map(|r| r.outcome),
            Some(ResolutionOutcome::Overflow { .. })
        )
    }

    /// Ordering of two contestants for the same round.
    ///
    /// Explicit priorities come first, ascending; entries without one sort
    /// after them and tie with each other, so a stable sort keeps their
    /// insertion order.
    #[must_use]
    pub fn contest_order(&self, other: &Self) -> Ordering {
        match (self.priority, other.priority) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(n: u8) -> Round {
        Round::new(n).unwrap()
    }

    #[test]
    fn decision_serde_uses_worksheet_labels() {
        let json = serde_json::to_string(&KeeperDecision::IntStash).unwrap();
        assert_eq!(json, "\"INT_STASH\"");
        let parsed: KeeperDecision = serde_json::from_str("\"REDSHIRT\"").unwrap();
        assert_eq!(parsed, KeeperDecision::Redshirt);
    }

    #[test]
    fn decision_cap_exemption() {
        assert!(KeeperDecision::Redshirt.is_cap_exempt());
        assert!(KeeperDecision::IntStash.is_cap_exempt());
        assert!(!KeeperDecision::Keep.is_cap_exempt());
        assert!(!KeeperDecision::Drop.is_cap_exempt());
    }

    #[test]
    fn entry_builders() {
        let e = RosterEntry::keep("p1")
            .with_base_round(round(4))
            .with_priority(2);
        assert!(e.is_keeper());
        assert_eq!(e.base_round, Some(round(4)));
        assert_eq!(e.priority, Some(2));
        assert_eq!(e.keeper_round(), None);
    }

    #[test]
    fn entry_resolution_accessors() {
        let mut e = RosterEntry::keep("p1");
        e.resolution = Some(KeeperResolution {
            round: Round::FIRST,
            outcome: ResolutionOutcome::FranchiseTag,
        });
        assert!(e.is_franchise_tag());
        assert!(!e.is_overflow());
        assert_eq!(e.keeper_round(), Some(Round::FIRST));
        assert!(!e.resolution.unwrap().occupies_slot());
    }

    #[test]
    fn contest_order_prefers_explicit_priority() {
        let a = RosterEntry::keep("a").with_priority(1);
        let b = RosterEntry::keep("b").with_priority(0);
        let c = RosterEntry::keep("c");
        let d = RosterEntry::keep("d");

        assert_eq!(a.contest_order(&b), Ordering::Greater);
        assert_eq!(a.contest_order(&c), Ordering::Less);
        assert_eq!(c.contest_order(&a), Ordering::Greater);
        assert_eq!(c.contest_order(&d), Ordering::Equal);
    }

    #[test]
    fn resolution_serde_is_tagged() {
        let r = KeeperResolution {
            round: round(7),
            outcome: ResolutionOutcome::Displaced { from: round(5) },
        };
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["round"], 7);
        assert_eq!(json["outcome"]["kind"], "DISPLACED");
        assert_eq!(json["outcome"]["from"], 5);
    }
}
