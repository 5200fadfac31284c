//! Draft rounds and the league's round space.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A draft round. Round 1 is the earliest and most valuable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Round(u8);

impl Round {
    /// The first round.
    pub const FIRST: Self = Self(1);

    /// Create a round number.
    ///
    /// # Errors
    ///
    /// Returns error if `number` is zero.
    pub fn new(number: u8) -> Result<Self, DomainError> {
        if number == 0 {
            return Err(DomainError::InvalidValue {
                field: "round".to_string(),
                message: "rounds start at 1".to_string(),
            });
        }
        Ok(Self(number))
    }

    /// Round number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns true for round 1.
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }

    /// The following (later, cheaper) round, if representable.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl TryFrom<u8> for Round {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Round> for u8 {
    fn from(value: Round) -> Self {
        value.0
    }
}

/// The fixed range of draft rounds `[1, R]` for a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoundSpace {
    rounds: u8,
}

impl RoundSpace {
    /// Create a round space with `rounds` rounds.
    ///
    /// # Errors
    ///
    /// Returns error if `rounds` is zero.
    pub fn new(rounds: u8) -> Result<Self, DomainError> {
        if rounds == 0 {
            return Err(DomainError::InvalidValue {
                field: "round_count".to_string(),
                message: "a draft needs at least one round".to_string(),
            });
        }
        Ok(Self { rounds })
    }

    /// Number of rounds (R).
    #[must_use]
    pub const fn rounds(self) -> u8 {
        self.rounds
    }

    /// The latest round (R), the cheapest keep.
    #[must_use]
    pub const fn last(self) -> Round {
        Round(self.rounds)
    }

    /// Returns true if `round` lies in `[1, R]`.
    #[must_use]
    pub const fn contains(self, round: Round) -> bool {
        round.0 <= self.rounds
    }

    /// Clamp an arbitrary round number into `[1, R]`.
    #[must_use]
    pub fn clamp(self, number: u32) -> Round {
        let bounded = number.clamp(1, u32::from(self.rounds));
        Round(u8::try_from(bounded).unwrap_or(self.rounds))
    }

    /// Rounds from `start` through R, in ascending order.
    pub fn from_round(self, start: Round) -> impl Iterator<Item = Round> {
        (start.0..=self.rounds).map(Round)
    }
}

impl TryFrom<u8> for RoundSpace {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoundSpace> for u8 {
    fn from(value: RoundSpace) -> Self {
        value.rounds
    }
}
