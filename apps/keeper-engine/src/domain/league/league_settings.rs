//! League settings aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cap_fees::{
    CapFeeCalculator, FeeLockPolicy, LeagueCapSettings, LeagueFeeSettings,
};
use crate::domain::keeper_rounds::{PriorityAdjuster, RoundDeriver, StackingResolver};
use crate::domain::roster_validation::{RosterLimits, RosterValidator};
use crate::domain::shared::{DomainError, LeagueId, RoundSpace};

/// Rules for one league: draft length, cap thresholds, fees and roster
/// limits.
///
/// Read-only to the engine and handed to each service explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// League identity.
    pub id: LeagueId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Number of draft rounds (R).
    pub round_count: RoundSpace,
    /// Salary-cap thresholds.
    pub cap: LeagueCapSettings,
    /// Fees and rates.
    pub fees: LeagueFeeSettings,
    /// Roster size limits.
    pub limits: RosterLimits,
    /// Start of the regular season; fees lock from this instant.
    #[serde(default)]
    pub regular_season_start: Option<DateTime<Utc>>,
}

impl LeagueSettings {
    /// Check cap, fee and limit settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSettings` naming the first bad field.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.cap.validate()?;
        self.fees.validate()?;
        if self.limits.max_keepers == 0 {
            return Err(DomainError::InvalidSettings {
                field: "limits.max_keepers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Base-round deriver for this league's draft.
    #[must_use]
    pub const fn round_deriver(&self) -> RoundDeriver {
        RoundDeriver::new(self.round_count)
    }

    /// Stacking resolver for this league's draft.
    #[must_use]
    pub const fn stacking_resolver(&self) -> StackingResolver {
        StackingResolver::new(self.round_count)
    }

    /// Priority adjuster grouping entries like the resolver.
    #[must_use]
    pub const fn priority_adjuster(&self) -> PriorityAdjuster {
        PriorityAdjuster::new(self.stacking_resolver())
    }

    /// Cap and fee calculator for this league.
    #[must_use]
    pub fn cap_fee_calculator(&self) -> CapFeeCalculator {
        CapFeeCalculator::new(self.cap.clone(), self.fees.clone())
    }

    /// Roster validator for this league.
    #[must_use]
    pub const fn roster_validator(&self) -> RosterValidator {
        RosterValidator::new(self.limits)
    }

    /// Fee lock policy for the current season.
    #[must_use]
    pub const fn fee_lock_policy(&self) -> FeeLockPolicy {
        FeeLockPolicy::new(self.regular_season_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;

    fn settings() -> LeagueSettings {
        LeagueSettings {
            id: LeagueId::new("dynasty"),
            name: "Dynasty".to_string(),
            round_count: RoundSpace::new(13).unwrap(),
            cap: LeagueCapSettings {
                first_apron: Money::millions(195),
                second_apron: Money::millions(225),
                max: Money::millions(255),
                floor: Money::millions(170),
                base: None,
            },
            fees: LeagueFeeSettings {
                franchise_tag_fee: Money::whole(15),
                redshirt_fee: Money::whole(10),
                redshirt_activation_fee: Money::whole(25),
                first_apron_fee: Money::whole(50),
                penalty_rate_per_m: Money::whole(2),
            },
            limits: RosterLimits {
                max_keepers: 8,
                max_active: 13,
                max_injured_reserve: 2,
            },
            regular_season_start: None,
        }
    }

    #[test]
    fn valid_settings_pass() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn zero_keeper_limit_rejected() {
        let mut s = settings();
        s.limits.max_keepers = 0;
        let Err(err) = s.validate() else {
            panic!("expected validation error");
        };
        assert!(err.to_string().contains("max_keepers"));
    }

    #[test]
    fn cap_errors_propagate() {
        let mut s = settings();
        s.cap.floor = Money::millions(300);
        assert!(s.validate().is_err());
    }

    #[test]
    fn yaml_round_trip_uses_snake_case_keys() {
        let yaml = r#"
id: dynasty
round_count: 14
cap:
  first_apron: 195000000
  second_apron: 225000000
  max: 255000000
  floor: 170000000
fees:
  franchise_tag_fee: 15
  redshirt_fee: 10
  first_apron_fee: 50
  penalty_rate_per_m: 2
limits:
  max_keepers: 8
  max_active: 13
  max_injured_reserve: 2
regular_season_start: "2025-10-21T23:00:00Z"
"#;
        let parsed: LeagueSettings = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(parsed.round_count.rounds(), 14);
        assert_eq!(parsed.fees.redshirt_activation_fee, Money::ZERO);
        assert!(parsed.regular_season_start.is_some());
    }
}
