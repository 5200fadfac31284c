//! Fee lock policy.

use chrono::{DateTime, Utc};

/// Decides whether a season's apron fees are locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeLockPolicy {
    regular_season_start: Option<DateTime<Utc>>,
}

impl FeeLockPolicy {
    /// Create a policy for a season starting at `regular_season_start`.
    #[must_use]
    pub const fn new(regular_season_start: Option<DateTime<Utc>>) -> Self {
        Self {
            regular_season_start,
        }
    }

    /// Fees are locked once an administrator finalised them or the regular
    /// season has started.
    #[must_use]
    pub fn is_locked(&self, finalized: bool, now: DateTime<Utc>) -> bool {
        finalized || self.regular_season_start.is_some_and(|start| start <= now)
    }
}
