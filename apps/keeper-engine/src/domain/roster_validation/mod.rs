//! Roster Validation Bounded Context
//!
//! Decides whether a keeper worksheet may be submitted. Errors block
//! submission; warnings are shown but allowed.

pub mod services;
pub mod value_objects;

pub use services::RosterValidator;
pub use value_objects::{IssueSeverity, RosterIssue, RosterLimits, RosterValidation};
