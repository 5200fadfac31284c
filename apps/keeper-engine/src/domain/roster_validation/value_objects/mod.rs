//! Roster Validation Value Objects

mod roster_limits;
mod validation_result;

pub use roster_limits::RosterLimits;
pub use validation_result::{IssueSeverity, RosterIssue, RosterValidation};
