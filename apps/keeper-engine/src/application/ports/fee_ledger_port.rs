//! Fee Ledger Port (Driven Port)
//!
//! Read access to apron fees already locked for a team and season. The
//! ledger is the only writer of these figures.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::domain::cap_fees::LockedFees;
use crate::domain::shared::{SeasonId, TeamId};

/// Fee ledger errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeeLedgerError {
    /// Ledger could not be reached.
    #[error("Fee ledger unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },
}

/// Port for reading locked fees.
#[cfg_attr(test, mockall::automock)]
pub trait FeeLedgerPort: Send + Sync {
    /// Locked apron fees for a team and season, if any were recorded.
    fn locked_fees(
        &self,
        team_id: &TeamId,
        season_id: &SeasonId,
    ) -> Result<Option<LockedFees>, FeeLedgerError>;
}

/// In-memory implementation for tests and file-driven runs.
#[derive(Debug, Default)]
pub struct InMemoryFeeLedger {
    records: RwLock<HashMap<(TeamId, SeasonId), LockedFees>>,
}

impl InMemoryFeeLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record locked fees for a team and season, replacing any earlier
    /// record.
    pub fn record_locked(&self, team_id: TeamId, season_id: SeasonId, fees: LockedFees) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert((team_id, season_id), fees);
    }
}

impl FeeLedgerPort for InMemoryFeeLedger {
    fn locked_fees(
        &self,
        team_id: &TeamId,
        season_id: &SeasonId,
    ) -> Result<Option<LockedFees>, FeeLedgerError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&(team_id.clone(), season_id.clone())).copied())
    }
}
