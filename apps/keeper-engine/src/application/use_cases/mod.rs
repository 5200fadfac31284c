//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod evaluate_roster;

pub use evaluate_roster::{ApplicationError, EvaluateRosterUseCase};
