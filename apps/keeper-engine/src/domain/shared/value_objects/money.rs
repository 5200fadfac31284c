//! Money value object for salaries, cap figures and league dues.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// One million currency units, the granularity of apron overage.
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A league currency amount.
///
/// Salaries and cap thresholds are whole currency units; dues may carry
/// cents when a league configures fractional fees. Backed by a Decimal so
/// that fee arithmetic never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from whole currency units.
    #[must_use]
    pub fn whole(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money value from whole millions (e.g. `millions(225)`).
    #[must_use]
    pub fn millions(millions: i64) -> Self {
        Self(Decimal::from(millions) * MILLION)
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Amount above `threshold`, or zero when at or below it.
    #[must_use]
    pub fn excess_over(&self, threshold: Self) -> Self {
        if self.0 > threshold.0 {
            Self(self.0 - threshold.0)
        } else {
            Self::ZERO
        }
    }

    /// Whole millions contained in this amount, rounded up.
    ///
    /// Any positive fraction counts as a full million: one unit over is 1.
    /// Zero and negative amounts yield 0.
    #[must_use]
    pub fn whole_millions_ceil(&self) -> u32 {
        if !self.is_positive() {
            return 0;
        }
        (self.0 / MILLION).ceil().to_u32().unwrap_or(u32::MAX)
    }

    /// Clamp into `[floor, max]`.
    ///
    /// When `floor > max` the ceiling wins; settings validation rejects that
    /// configuration before it reaches a calculation.
    #[must_use]
    pub fn clamp_between(self, floor: Self, max: Self) -> Self {
        if self.0 > max.0 {
            max
        } else if self.0 < floor.0 {
            floor
        } else {
            self
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}
