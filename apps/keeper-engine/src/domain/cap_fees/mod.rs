//! Cap and Fees Bounded Context
//!
//! Turns a resolved roster into cap usage and league dues.
//!
//! # Key Concepts
//!
//! - **Effective cap**: base cap plus trade adjustments, clamped to the
//!   league floor and max
//! - **Aprons**: two thresholds above which flat and per-million fees apply;
//!   both zero disables them
//! - **Watermark**: once a season is locked, apron fees never drop below the
//!   values already assessed

pub mod services;
pub mod value_objects;

pub use services::{CapFeeCalculator, FeeLockPolicy, SummaryInput};
pub use value_objects::{
    ActiveRoster, CapFigures, FeeBreakdown, LeagueCapSettings, LeagueFeeSettings, LockedFees,
    RosterCounts, RosterSummary,
};
