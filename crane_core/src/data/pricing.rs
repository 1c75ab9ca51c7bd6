//! Pricing Constants
//!
//! Fixed multipliers and cost tables shared by the calculators:
//!
//! - Contract lift multiplier (CPA rate → fully managed rate)
//! - Duration discount bands
//! - Transport cost per crane size class
//! - Ancillary costs (permits, crew, insurance)

use serde::{Deserialize, Serialize};

use crate::units::CostRange;

// ============================================================================
// Contract Lift
// ============================================================================

/// Multiplier from a CPA daily rate to a contract lift daily rate.
///
/// Covers operator, supervision, insurance and lift planning. The min
/// factor applies to the min bound and the max factor to the max bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractLiftMultiplier {
    pub min: f64,
    pub max: f64,
    pub typical: f64,
}

pub const CONTRACT_LIFT_MULTIPLIER: ContractLiftMultiplier = ContractLiftMultiplier {
    min: 1.8,
    max: 2.2,
    typical: 2.0,
};

impl ContractLiftMultiplier {
    /// Apply to a regional CPA rate, bound by bound
    pub fn apply(&self, rate: CostRange) -> CostRange {
        rate.scale_bounds_round(self.min, self.max)
    }
}

// ============================================================================
// Duration Discounts
// ============================================================================

/// Hire length band; longer hires get a flat percentage off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBand {
    /// Under 5 days, full day rate
    Daily,
    /// 5 to 19 days, 10% off
    Weekly,
    /// 20 days or more, 20% off
    Monthly,
}

/// First day of the weekly band
pub const WEEKLY_THRESHOLD_DAYS: u32 = 5;
/// First day of the monthly band
pub const MONTHLY_THRESHOLD_DAYS: u32 = 20;

impl DurationBand {
    pub fn from_days(duration_days: u32) -> Self {
        if duration_days >= MONTHLY_THRESHOLD_DAYS {
            DurationBand::Monthly
        } else if duration_days >= WEEKLY_THRESHOLD_DAYS {
            DurationBand::Weekly
        } else {
            DurationBand::Daily
        }
    }

    /// Multiplier applied to `rate * days`
    pub fn multiplier(&self) -> f64 {
        match self {
            DurationBand::Daily => 1.0,
            DurationBand::Weekly => 0.9,
            DurationBand::Monthly => 0.8,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DurationBand::Daily => "Daily rate",
            DurationBand::Weekly => "Weekly discount (10%)",
            DurationBand::Monthly => "Monthly discount (20%)",
        }
    }
}

/// Duration discount multiplier for a hire of `duration_days`
pub fn duration_multiplier(duration_days: u32) -> f64 {
    DurationBand::from_days(duration_days).multiplier()
}

// ============================================================================
// Transport
// ============================================================================

/// Crane size class for transport pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportClass {
    /// Under 50t
    Small,
    /// 50-100t
    Medium,
    /// 100-200t
    Large,
    /// 200t and over
    Heavy,
}

/// Cost table for one transport class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportCostConfig {
    /// Fixed mobilisation cost, independent of distance
    pub base_cost: CostRange,
    /// Cost per mile (one way)
    pub per_mile: CostRange,
    pub escort_required: bool,
    /// Zero for classes without an escort
    pub escort_cost: CostRange,
}

impl TransportClass {
    /// Bucket a crane capacity. Each threshold belongs to the class above it.
    pub fn from_tonnage(tonnage: f64) -> Self {
        if tonnage < 50.0 {
            TransportClass::Small
        } else if tonnage < 100.0 {
            TransportClass::Medium
        } else if tonnage < 200.0 {
            TransportClass::Large
        } else {
            TransportClass::Heavy
        }
    }

    pub fn config(&self) -> TransportCostConfig {
        match self {
            TransportClass::Small => TransportCostConfig {
                base_cost: CostRange::new(100, 200),
                per_mile: CostRange::new(2, 3),
                escort_required: false,
                escort_cost: CostRange::ZERO,
            },
            TransportClass::Medium => TransportCostConfig {
                base_cost: CostRange::new(200, 350),
                per_mile: CostRange::new(3, 5),
                escort_required: false,
                escort_cost: CostRange::ZERO,
            },
            TransportClass::Large => TransportCostConfig {
                base_cost: CostRange::new(350, 500),
                per_mile: CostRange::new(5, 8),
                escort_required: true,
                escort_cost: CostRange::new(200, 400),
            },
            TransportClass::Heavy => TransportCostConfig {
                base_cost: CostRange::new(500, 800),
                per_mile: CostRange::new(8, 12),
                escort_required: true,
                escort_cost: CostRange::new(400, 700),
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransportClass::Small => "Small",
            TransportClass::Medium => "Medium",
            TransportClass::Large => "Large",
            TransportClass::Heavy => "Super Heavy",
        }
    }
}

// ============================================================================
// Ancillary Costs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PermitCosts {
    pub road_closure: CostRange,
    pub council_permit: CostRange,
    pub airspace: CostRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrewRate {
    pub hourly: CostRange,
    pub daily: CostRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrewCosts {
    /// Also used for an Appointed Person on CPA hires
    pub operator: CrewRate,
    pub slinger: CrewRate,
    pub banksman: CrewRate,
}

/// Costs a customer arranges separately on a CPA hire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AncillaryCosts {
    pub permit: PermitCosts,
    pub crew: CrewCosts,
    pub insurance_daily: CostRange,
}

pub const ANCILLARY_COSTS: AncillaryCosts = AncillaryCosts {
    permit: PermitCosts {
        road_closure: CostRange::new(100, 250),
        council_permit: CostRange::new(50, 150),
        airspace: CostRange::new(150, 300),
    },
    crew: CrewCosts {
        operator: CrewRate {
            hourly: CostRange::new(25, 50),
            daily: CostRange::new(200, 400),
        },
        slinger: CrewRate {
            hourly: CostRange::new(20, 35),
            daily: CostRange::new(160, 280),
        },
        banksman: CrewRate {
            hourly: CostRange::new(18, 30),
            daily: CostRange::new(140, 240),
        },
    },
    insurance_daily: CostRange::new(50, 150),
};

/// Typical daily extras on a CPA hire (Appointed Person, one slinger, insurance)
pub const CPA_EXTRAS_PER_DAY: CostRange = CostRange::new(550, 1030);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_lift_is_asymmetric() {
        let rate = CONTRACT_LIFT_MULTIPLIER.apply(CostRange::new(100, 200));
        assert_eq!(rate, CostRange::new(180, 440));
        // Not the typical multiplier on both bounds
        assert_ne!(rate, CostRange::new(100, 200).scale_round(CONTRACT_LIFT_MULTIPLIER.typical));
    }

    #[test]
    fn test_duration_bands() {
        assert_eq!(DurationBand::from_days(1), DurationBand::Daily);
        assert_eq!(DurationBand::from_days(4), DurationBand::Daily);
        assert_eq!(DurationBand::from_days(5), DurationBand::Weekly);
        assert_eq!(DurationBand::from_days(19), DurationBand::Weekly);
        assert_eq!(DurationBand::from_days(20), DurationBand::Monthly);
        assert_eq!(DurationBand::from_days(365), DurationBand::Monthly);

        assert_eq!(duration_multiplier(4), 1.0);
        assert_eq!(duration_multiplier(5), 0.9);
        assert_eq!(duration_multiplier(20), 0.8);
    }

    #[test]
    fn test_transport_class_boundaries() {
        assert_eq!(TransportClass::from_tonnage(49.9), TransportClass::Small);
        assert_eq!(TransportClass::from_tonnage(50.0), TransportClass::Medium);
        assert_eq!(TransportClass::from_tonnage(99.9), TransportClass::Medium);
        assert_eq!(TransportClass::from_tonnage(100.0), TransportClass::Large);
        assert_eq!(TransportClass::from_tonnage(199.9), TransportClass::Large);
        assert_eq!(TransportClass::from_tonnage(200.0), TransportClass::Heavy);
    }

    #[test]
    fn test_escort_only_for_large_classes() {
        let classes = [
            TransportClass::Small,
            TransportClass::Medium,
            TransportClass::Large,
            TransportClass::Heavy,
        ];
        for class in classes {
            let config = class.config();
            assert_eq!(config.escort_cost.is_zero(), !config.escort_required);
        }
    }
}
