//! League cap and fee settings.
//!
//! Owned by league configuration and passed explicitly into every
//! calculation; the engine never reads them from ambient state.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, Money};

/// Salary-cap thresholds for a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueCapSettings {
    /// Soft threshold; crossing it triggers the flat first-apron fee.
    pub first_apron: Money,
    /// Penalty threshold; every started million above it is charged.
    pub second_apron: Money,
    /// Hard ceiling for the effective cap.
    pub max: Money,
    /// Lower bound for the effective cap.
    pub floor: Money,
    /// Team base cap before trade adjustments. Defaults to the second apron
    /// (or `max` when aprons are disabled).
    #[serde(default)]
    pub base: Option<Money>,
}

impl LeagueCapSettings {
    /// Aprons are disabled when both thresholds are zero.
    #[must_use]
    pub fn aprons_enabled(&self) -> bool {
        !(self.first_apron.is_zero() && self.second_apron.is_zero())
    }

    /// Base cap a team starts from before trade adjustments.
    #[must_use]
    pub fn cap_base(&self) -> Money {
        match self.base {
            Some(base) => base,
            None if self.aprons_enabled() => self.second_apron,
            None => self.max,
        }
    }

    /// Check the thresholds are consistent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSettings` naming the first bad field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |field: &str, message: &str| {
            Err(DomainError::InvalidSettings {
                field: field.to_string(),
                message: message.to_string(),
            })
        };

        for (field, value) in [
            ("first_apron", self.first_apron),
            ("second_apron", self.second_apron),
            ("max", self.max),
            ("floor", self.floor),
        ] {
            if value.is_negative() {
                return invalid(field, "must not be negative");
            }
        }
        if self.aprons_enabled() && self.first_apron >= self.second_apron {
            return invalid("second_apron", "must be above first_apron");
        }
        if self.floor > self.max {
            return invalid("floor", "must not exceed max");
        }
        if let Some(base) = self.base
            && base.is_negative()
        {
            return invalid("base", "must not be negative");
        }
        Ok(())
    }
}

/// Flat fees and rates charged by a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueFeeSettings {
    /// Fee per franchise tag.
    pub franchise_tag_fee: Money,
    /// Fee per redshirted player.
    pub redshirt_fee: Money,
    /// Fee each time a redshirt is activated to the active roster.
    pub redshirt_activation_fee: Money,
    /// Flat fee once cap usage exceeds the first apron.
    pub first_apron_fee: Money,
    /// Penalty per started million over the second apron.
    pub penalty_rate_per_m: Money,
}

impl LeagueFeeSettings {
    /// Check no fee is negative.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSettings` naming the first bad field.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("franchise_tag_fee", self.franchise_tag_fee),
            ("redshirt_fee", self.redshirt_fee),
            ("redshirt_activation_fee", self.redshirt_activation_fee),
            ("first_apron_fee", self.first_apron_fee),
            ("penalty_rate_per_m", self.penalty_rate_per_m),
        ] {
            if value.is_negative() {
                return Err(DomainError::InvalidSettings {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}
