//! Keeper Rounds Bounded Context
//!
//! Decides what draft round each kept player costs.
//!
//! # Key Concepts
//!
//! - **Base round**: last season's draft round moved one round earlier
//! - **Stacking**: keepers contesting the same base round are spread over
//!   later open rounds in priority order
//! - **Franchise tag**: a round-1 contestant beyond the first, paid for with
//!   a fee instead of a round slot

pub mod services;
pub mod value_objects;

pub use services::{PriorityAdjuster, PriorityMove, RoundDeriver, StackingResolver};
pub use value_objects::{
    KeeperDecision, KeeperResolution, Player, Position, ResolutionOutcome, RosterEntry,
    StackingOutcome,
};
