//! Roster Validation Domain Services

mod roster_validator;

pub use roster_validator::RosterValidator;
