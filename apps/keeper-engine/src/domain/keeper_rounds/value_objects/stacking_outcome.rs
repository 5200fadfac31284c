//! Result of a stacking run.

use serde::{Deserialize, Serialize};

use super::RosterEntry;

/// Resolved worksheet plus the franchise tags it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackingOutcome {
    /// Every input entry, in input order. KEEP entries carry a resolution.
    pub entries: Vec<RosterEntry>,
    /// Round-1 contestants beyond the first.
    pub franchise_tags: u32,
}

impl StackingOutcome {
    /// Keepers that ran out of rounds and need manual resolution.
    #[must_use]
    pub fn overflowed(&self) -> Vec<&RosterEntry> {
        self.entries.iter().filter(|e| e.is_overflow()).collect()
    }

    /// Returns true if any keeper needs manual resolution.
    #[must_use]
    pub fn requires_manual_resolution(&self) -> bool {
        self.entries.iter().any(RosterEntry::is_overflow)
    }

    /// Number of KEEP entries.
    #[must_use]
    pub fn keeper_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_keeper()).count()
    }
}
