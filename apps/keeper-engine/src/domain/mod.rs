//! Domain Layer
//!
//! Pure keeper-round and cap/fee logic with no I/O. This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic over caller-supplied values
//!
//! # Bounded Contexts
//!
//! - [`keeper_rounds`]: Base rounds, stacking and franchise tags
//! - [`cap_fees`]: Cap usage and league dues
//! - [`roster_validation`]: Submission gating
//! - [`league`]: Per-league rules tying the contexts together

pub mod cap_fees;
pub mod keeper_rounds;
pub mod league;
pub mod roster_validation;
pub mod shared;
