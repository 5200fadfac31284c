//! Keeper Rounds Value Objects

mod player;
mod roster_entry;
mod stacking_outcome;

pub use player::{Player, Position};
pub use roster_entry::{KeeperDecision, KeeperResolution, ResolutionOutcome, RosterEntry};
pub use stacking_outcome::StackingOutcome;
