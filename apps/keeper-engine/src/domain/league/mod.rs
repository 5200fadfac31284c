//! League Bounded Context
//!
//! The per-league rules every other context is parameterised by.

mod league_settings;

pub use league_settings::LeagueSettings;
