//! Evaluate Roster Use Case
//!
//! Runs one worksheet through derive → stack → summarise → validate.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::application::dto::{RosterEvaluationDto, RosterWorksheetDto};
use crate::application::ports::{FeeLedgerError, FeeLedgerPort};
use crate::domain::cap_fees::SummaryInput;
use crate::domain::keeper_rounds::{Player, PriorityMove};
use crate::domain::league::LeagueSettings;
use crate::domain::roster_validation::RosterValidator;
use crate::domain::shared::{DomainError, PlayerId};

/// Application errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Reading locked fees failed.
    #[error("Failed to read locked fees: {0}")]
    FeeLedger(#[from] FeeLedgerError),

    /// A domain invariant was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Use case for evaluating a team's keeper worksheet.
pub struct EvaluateRosterUseCase<L>
where
    L: FeeLedgerPort,
{
    ledger: Arc<L>,
    settings: LeagueSettings,
}

impl<L> EvaluateRosterUseCase<L>
where
    L: FeeLedgerPort,
{
    /// Create a new EvaluateRosterUseCase.
    pub const fn new(ledger: Arc<L>, settings: LeagueSettings) -> Self {
        Self { ledger, settings }
    }

    /// League settings in use.
    pub const fn settings(&self) -> &LeagueSettings {
        &self.settings
    }

    /// Execute the use case.
    ///
    /// `now` decides whether the season's apron fees are locked.
    pub fn execute(
        &self,
        worksheet: &RosterWorksheetDto,
        now: DateTime<Utc>,
    ) -> Result<RosterEvaluationDto, ApplicationError> {
        let span = tracing::info_span!(
            "evaluate_roster",
            team_id = %worksheet.team_id,
            season_id = %worksheet.season_id
        );
        let _guard = span.enter();

        // 1. Derive base rounds
        let players = player_pool(&worksheet.players);
        let mut entries = worksheet.entries.clone();
        self.settings
            .round_deriver()
            .seed_base_rounds(&mut entries, &players);

        // 2. Stack keepers into final rounds
        let outcome = self.settings.stacking_resolver().stack(&entries);

        // 3. Summarise cap usage and fees
        let locked = if self
            .settings
            .fee_lock_policy()
            .is_locked(worksheet.fees_finalized, now)
        {
            self.ledger
                .locked_fees(&worksheet.team_id, &worksheet.season_id)?
        } else {
            None
        };

        let summary = self.settings.cap_fee_calculator().compute_summary(&SummaryInput {
            entries: &outcome.entries,
            players: &players,
            active_roster: worksheet.active_roster.as_ref(),
            trade_delta: worksheet.trade_delta,
            franchise_tags: outcome.franchise_tags,
            locked: locked.as_ref(),
        });

        // 4. Validate
        let mut validation = self.settings.roster_validator().validate_roster(
            &outcome.entries,
            &players,
            worksheet.active_roster.as_ref(),
        );
        validation.merge(RosterValidator::validate_resolution(&outcome.entries));
        validation.merge(RosterValidator::validate_summary(
            &summary,
            self.settings.cap.aprons_enabled(),
        ));

        tracing::info!(
            keepers = summary.counts.keepers,
            franchise_tags = outcome.franchise_tags,
            total_fees = %summary.fees.total_fees,
            errors = validation.errors().len(),
            warnings = validation.warnings().len(),
            "Roster evaluated"
        );

        Ok(RosterEvaluationDto {
            team_id: worksheet.team_id.clone(),
            season_id: worksheet.season_id.clone(),
            entries: outcome.entries,
            franchise_tags: outcome.franchise_tags,
            summary,
            submittable: validation.passed,
            issues: validation.issues,
        })
    }

    /// Move a keeper up or down within its contested round, then
    /// re-evaluate.
    ///
    /// The worksheet's priorities are rewritten in place so the caller can
    /// persist them.
    pub fn move_priority(
        &self,
        worksheet: &mut RosterWorksheetDto,
        player_id: &PlayerId,
        direction: PriorityMove,
        now: DateTime<Utc>,
    ) -> Result<RosterEvaluationDto, ApplicationError> {
        let players = player_pool(&worksheet.players);
        self.settings
            .round_deriver()
            .seed_base_rounds(&mut worksheet.entries, &players);

        let moved = self.settings.priority_adjuster().move_priority(
            &mut worksheet.entries,
            player_id,
            direction,
        )?;
        if !moved {
            tracing::debug!(player_id = %player_id, ?direction, "Priority unchanged");
        }

        self.execute(worksheet, now)
    }
}

fn player_pool(players: &[Player]) -> HashMap<PlayerId, Player> {
    players.iter().map(|p| (p.id.clone(), p.clone())).collect()
}
