//! Roster summary: counts, cap figures and itemised fees.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Player counts that drive fees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterCounts {
    /// KEEP decisions (franchise tags included).
    pub keepers: u32,
    /// REDSHIRT decisions.
    pub redshirts: u32,
    /// INT_STASH decisions.
    pub international_stashes: u32,
    /// Round-1 contestants beyond the first.
    pub franchise_tags: u32,
    /// Redshirts activated to the active roster this season.
    pub redshirt_activations: u32,
}

/// Cap usage against the league thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapFigures {
    /// Salary counted toward the cap.
    pub cap_used: Money,
    /// Base cap before trades.
    pub cap_base: Money,
    /// Net cap adjustment from trades.
    pub cap_trade_delta: Money,
    /// `clamp(cap_base + cap_trade_delta, floor, max)`.
    pub cap_effective: Money,
    /// Started millions above the second apron.
    #[serde(rename = "overSecondApronByM")]
    pub over_second_apron_by_m: u32,
    /// Cap usage is above the first apron.
    pub over_first_apron: bool,
    /// Cap usage is above the second apron.
    pub over_second_apron: bool,
    /// Cap usage is above the effective cap.
    pub over_effective_cap: bool,
}

/// Itemised league dues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Franchise tags × tag fee.
    pub franchise_tag_dues: Money,
    /// Redshirts × redshirt fee.
    pub redshirt_dues: Money,
    /// Activations × activation fee.
    pub activation_dues: Money,
    /// Flat fee above the first apron.
    pub first_apron_fee: Money,
    /// Millions over the second apron × penalty rate.
    pub penalty_dues: Money,
    /// Sum of all dues.
    pub total_fees: Money,
}

impl FeeBreakdown {
    /// Recompute `total_fees` from the itemised dues.
    #[must_use]
    pub fn with_total(mut self) -> Self {
        self.total_fees = self.franchise_tag_dues
            + self.redshirt_dues
            + self.activation_dues
            + self.first_apron_fee
            + self.penalty_dues;
        self
    }
}

/// Derived view of a team's roster for one season.
///
/// Recomputed on every relevant change; never stored independently of its
/// inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    /// Player counts.
    pub counts: RosterCounts,
    /// Cap figures.
    pub cap: CapFigures,
    /// Itemised dues.
    pub fees: FeeBreakdown,
    /// Apron fees were floored at previously locked values.
    pub fees_locked: bool,
}

/// Apron dues already assessed for a team and season.
///
/// Written only by the fee ledger; the engine reads them as a floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedFees {
    /// First-apron fee already assessed.
    pub first_apron_fee: Money,
    /// Second-apron penalty already assessed.
    pub penalty_dues: Money,
}
