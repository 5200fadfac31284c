//! Keeper Rounds Domain Services

mod priority_adjuster;
mod round_deriver;
mod stacking_resolver;

pub use priority_adjuster::{PriorityAdjuster, PriorityMove};
pub use round_deriver::RoundDeriver;
pub use stacking_resolver::StackingResolver;
