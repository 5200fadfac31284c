//! Keeper worksheet DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::cap_fees::{ActiveRoster, LockedFees, RosterSummary};
use crate::domain::keeper_rounds::{Player, RosterEntry};
use crate::domain::roster_validation::RosterIssue;
use crate::domain::shared::{Money, SeasonId, TeamId};

/// One team's keeper worksheet as supplied by persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterWorksheetDto {
    /// Team the worksheet belongs to.
    pub team_id: TeamId,
    /// Season being kept into.
    pub season_id: SeasonId,
    /// Player pool entries for every player on the worksheet.
    pub players: Vec<Player>,
    /// Keeper decisions in worksheet order.
    pub entries: Vec<RosterEntry>,
    /// In-season roster, once the season is under way.
    #[serde(default)]
    pub active_roster: Option<ActiveRoster>,
    /// Net cap adjustment from trades.
    #[serde(default)]
    pub trade_delta: Money,
    /// An administrator finalised this season's fees.
    #[serde(default)]
    pub fees_finalized: bool,
    /// Fees already locked by the ledger, when the caller has them at hand.
    #[serde(default)]
    pub locked_fees: Option<LockedFees>,
}

/// Evaluation returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEvaluationDto {
    /// Team evaluated.
    pub team_id: TeamId,
    /// Season evaluated.
    pub season_id: SeasonId,
    /// Entries with base rounds and keeper rounds filled in.
    pub entries: Vec<RosterEntry>,
    /// Round-1 contestants beyond the first.
    pub franchise_tags: u32,
    /// Cap and fee summary.
    pub summary: RosterSummary,
    /// Validation issues, errors first in discovery order.
    pub issues: Vec<RosterIssue>,
    /// The worksheet may be submitted (no errors).
    pub submittable: bool,
}

impl RosterEvaluationDto {
    /// Issues that block submission.
    #[must_use]
    pub fn errors(&self) -> impl Iterator<Item = &RosterIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }
}
