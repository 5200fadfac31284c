//! In-season roster.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::shared::PlayerId;

/// A team's roster once the season is under way.
///
/// Supplied by the persistence layer; the engine never edits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRoster {
    /// Players in active slots.
    #[serde(default)]
    pub active: Vec<PlayerId>,
    /// Players on injured reserve.
    #[serde(default)]
    pub injured_reserve: Vec<PlayerId>,
    /// Redshirted players activated this season.
    #[serde(default)]
    pub activated_redshirts: Vec<PlayerId>,
}

impl ActiveRoster {
    /// Distinct players that count toward the cap before exemptions:
    /// active slots plus injured reserve.
    #[must_use]
    pub fn cap_counted(&self) -> BTreeSet<&PlayerId> {
        self.active.iter().chain(&self.injured_reserve).collect()
    }

    /// Distinct activated redshirts.
    #[must_use]
    pub fn activations(&self) -> BTreeSet<&PlayerId> {
        self.activated_redshirts.iter().collect()
    }
}
