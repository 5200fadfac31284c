//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod money;
mod round;

pub use identifiers::{LeagueId, PlayerId, SeasonId, TeamId};
pub use money::Money;
pub use round::{Round, RoundSpace};
