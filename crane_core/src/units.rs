//! # Unit Types
//!
//! Lightweight wrappers for the quantities the calculators work in:
//! load weight (kilograms, tonnes) and money (whole pounds sterling).
//!
//! ## Money
//!
//! Every price in the engine is a [`CostRange`]: a `(min, max)` pair of
//! whole pounds. Bounds are always scaled and rounded independently, so a
//! range can widen or narrow by a pound relative to exact arithmetic.
//!
//! ## Rounding
//!
//! [`round_half_up`] rounds `.5` toward positive infinity (`-2.5 → -2`).
//! `f64::round` rounds half away from zero and is not used for
//! prices.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::units::{CostRange, Kilograms, Tonnes};
//!
//! let load: Tonnes = Kilograms(5000.0).into();
//! assert_eq!(load.0, 5.0);
//!
//! let daily = CostRange::new(400, 500);
//! assert_eq!(daily.scale_round(1.3), CostRange::new(520, 650));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

// ============================================================================
// Weight Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in metric tonnes (1 t = 1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

impl Kilograms {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Tonnes {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Unit a load weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Metric tonnes
    Tonnes,
}

impl WeightUnit {
    /// Convert a raw value in this unit to kilograms
    pub fn to_kilograms(self, value: f64) -> Kilograms {
        match self {
            WeightUnit::Kg => Kilograms(value),
            WeightUnit::Tonnes => Tonnes(value).into(),
        }
    }
}

// ============================================================================
// Money
// ============================================================================

/// Round to the nearest integer, with halves rounded toward positive infinity.
///
/// Values beyond the `i64` range saturate; NaN maps to zero.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        (floor as i64).saturating_add(1)
    } else {
        floor as i64
    }
}

/// A price range in whole pounds sterling (GBP).
///
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CostRange {
    pub min: i64,
    pub max: i64,
}

impl CostRange {
    /// A zero-width zero cost
    pub const ZERO: CostRange = CostRange { min: 0, max: 0 };

    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Multiply each bound by `factor` and round half up, independently.
    pub fn scale_round(self, factor: f64) -> Self {
        Self {
            min: round_half_up(self.min as f64 * factor),
            max: round_half_up(self.max as f64 * factor),
        }
    }

    /// Scale the min bound by `min_factor` and the max bound by `max_factor`.
    pub fn scale_bounds_round(self, min_factor: f64, max_factor: f64) -> Self {
        Self {
            min: round_half_up(self.min as f64 * min_factor),
            max: round_half_up(self.max as f64 * max_factor),
        }
    }

    /// Divide each bound by `divisor` and round half up.
    pub fn div_round(self, divisor: f64) -> Self {
        Self {
            min: round_half_up(self.min as f64 / divisor),
            max: round_half_up(self.max as f64 / divisor),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

impl Add for CostRange {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min.saturating_add(rhs.min),
            max: self.max.saturating_add(rhs.max),
        }
    }
}

impl AddAssign for CostRange {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for CostRange {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min.saturating_sub(rhs.min),
            max: self.max.saturating_sub(rhs.max),
        }
    }
}

/// Multiply by a whole count (days, crew members, trips)
impl Mul<i64> for CostRange {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self::Output {
        Self {
            min: self.min.saturating_mul(rhs),
            max: self.max.saturating_mul(rhs),
        }
    }
}

impl std::iter::Sum for CostRange {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(CostRange::ZERO, |acc, r| acc + r)
    }
}
