//! Roster size limits.

use serde::{Deserialize, Serialize};

/// Structural roster limits for a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterLimits {
    /// Maximum KEEP decisions per worksheet.
    pub max_keepers: u32,
    /// Maximum players in active slots.
    pub max_active: u32,
    /// Maximum players on injured reserve.
    pub max_injured_reserve: u32,
}
