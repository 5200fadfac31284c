//! Player value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{Money, PlayerId, Round};

/// Basketball position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    /// Point guard.
    Pg,
    /// Shooting guard.
    Sg,
    /// Small forward.
    Sf,
    /// Power forward.
    Pf,
    /// Center.
    C,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pg => "PG",
            Self::Sg => "SG",
            Self::Sf => "SF",
            Self::Pf => "PF",
            Self::C => "C",
        };
        f.write_str(label)
    }
}

/// A player as supplied by the league's player pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Player identity.
    pub id: PlayerId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Salary in whole currency units.
    pub salary: Money,
    /// Positions the player is listed at.
    #[serde(default)]
    pub positions: Vec<Position>,
    /// First-year player.
    #[serde(default)]
    pub is_rookie: bool,
    /// Currently stashed overseas.
    #[serde(default)]
    pub is_international_stash: bool,
    /// League has marked the player redshirt-eligible.
    #[serde(default)]
    pub redshirt_eligible: bool,
    /// League has marked the player eligible for an international stash.
    #[serde(default)]
    pub int_eligible: bool,
    /// Round the player was selected in last season's draft, if any.
    #[serde(default)]
    pub prior_year_round: Option<Round>,
}

impl Player {
    /// Create a player with no flags and no draft history.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, salary: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
            positions: Vec::new(),
            is_rookie: false,
            is_international_stash: false,
            redshirt_eligible: false,
            int_eligible: false,
            prior_year_round: None,
        }
    }

    /// Set last season's draft round.
    #[must_use]
    pub const fn with_prior_round(mut self, round: Round) -> Self {
        self.prior_year_round = Some(round);
        self
    }

    /// Set listed positions.
    #[must_use]
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = Position>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    /// Mark as a rookie.
    #[must_use]
    pub const fn rookie(mut self) -> Self {
        self.is_rookie = true;
        self
    }

    /// Mark as redshirt-eligible.
    #[must_use]
    pub const fn redshirt_eligible(mut self) -> Self {
        self.redshirt_eligible = true;
        self
    }

    /// Mark as eligible for an international stash.
    #[must_use]
    pub const fn int_eligible(mut self) -> Self {
        self.int_eligible = true;
        self
    }

    /// Mark as currently stashed overseas.
    #[must_use]
    pub const fn international_stash(mut self) -> Self {
        self.is_international_stash = true;
        self
    }

    /// May be placed on a redshirt.
    #[must_use]
    pub const fn can_redshirt(&self) -> bool {
        self.is_rookie || self.redshirt_eligible
    }

    /// May be placed on an international stash.
    #[must_use]
    pub const fn can_int_stash(&self) -> bool {
        self.is_international_stash || self.int_eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_defaults() {
        let p = Player::new("p1", "Test Guard", Money::millions(12));
        assert_eq!(p.id.as_str(), "p1");
        assert!(p.prior_year_round.is_none());
        assert!(!p.can_redshirt());
        assert!(!p.can_int_stash());
    }

    #[test]
    fn player_eligibility_flags() {
        let rookie = Player::new("p1", "Rook", Money::whole(1)).rookie();
        assert!(rookie.can_redshirt());

        let flagged = Player::new("p2", "Flagged", Money::whole(1)).redshirt_eligible();
        assert!(flagged.can_redshirt());

        let overseas = Player::new("p3", "Overseas", Money::whole(1)).international_stash();
        assert!(overseas.can_int_stash());

        let eligible = Player::new("p4", "Eligible", Money::whole(1)).int_eligible();
        assert!(eligible.can_int_stash());
    }

    #[test]
    fn player_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": "p9",
            "salary": 4500000,
            "positions": ["PG", "SG"],
            "isRookie": true,
            "priorYearRound": 6
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.salary, Money::whole(4_500_000));
        assert_eq!(p.positions, vec![Position::Pg, Position::Sg]);
        assert!(p.is_rookie);
        assert!(!p.redshirt_eligible);
        assert_eq!(p.prior_year_round.map(Round::number), Some(6));
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::Pf.to_string(), "PF");
        assert_eq!(Position::C.to_string(), "C");
    }
}
