// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Keeper Engine - Rust Core Library
//!
//! Keeper-round allocation and salary-cap/fee engine for a fantasy
//! basketball league.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure business logic over caller-supplied values
//!   - `keeper_rounds`: Base rounds, stacking, franchise tags, priorities
//!   - `cap_fees`: Cap usage, apron fees, fee watermark
//!   - `roster_validation`: Submission gating (errors and warnings)
//!   - `league`: Per-league settings
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`FeeLedgerPort`)
//!   - `use_cases`: `EvaluateRoster`
//!   - `dto`: Worksheet input and evaluation output
//!
//! - **Config**: League YAML loading and validation

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Configuration loading and validation.
pub mod config;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::cap_fees::{
    ActiveRoster, CapFeeCalculator, FeeLockPolicy, LeagueCapSettings, LeagueFeeSettings,
    LockedFees, RosterSummary,
};
pub use domain::keeper_rounds::{
    KeeperDecision, Player, PriorityAdjuster, PriorityMove, RosterEntry, RoundDeriver,
    StackingOutcome, StackingResolver,
};
pub use domain::league::LeagueSettings;
pub use domain::roster_validation::{RosterIssue, RosterLimits, RosterValidation, RosterValidator};
pub use domain::shared::{
    DomainError, LeagueId, Money, PlayerId, Round, RoundSpace, SeasonId, TeamId,
};

// Application re-exports
pub use application::dto::{RosterEvaluationDto, RosterWorksheetDto};
pub use application::ports::{FeeLedgerError, FeeLedgerPort, InMemoryFeeLedger};
pub use application::use_cases::{ApplicationError, EvaluateRosterUseCase};
