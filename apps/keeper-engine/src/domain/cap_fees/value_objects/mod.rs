//! Cap and Fee Value Objects

mod active_roster;
mod league_settings;
mod roster_summary;

pub use active_roster::ActiveRoster;
pub use league_settings::{LeagueCapSettings, LeagueFeeSettings};
pub use roster_summary::{CapFigures, FeeBreakdown, LockedFees, RosterCounts, RosterSummary};
