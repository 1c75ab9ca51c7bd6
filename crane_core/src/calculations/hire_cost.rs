//! # Hire Cost Calculation
//!
//! Prices a crane hire from the catalog daily rate:
//!
//! 1. Base daily rate from the crane type's tonnage band
//! 2. Regional multiplier (unknown region → baseline `1.0`)
//! 3. Contract lift uplift, min bound × 1.8 and max bound × 2.2
//! 4. Duration discount: `< 5` days full rate, `5..20` 10% off, `≥ 20` 20% off
//! 5. Total for the hire, then an effective per-day rate re-derived from it
//!
//! Every step rounds each bound independently (half up), so `per_day` can
//! differ by a pound from the discounted daily rate.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::calculations::hire_cost::calculate_hire_cost;
//! use crane_core::units::CostRange;
//!
//! let result = calculate_hire_cost("mobile", "50-80t", 3, "midlands", false).unwrap();
//! assert_eq!(result.base_daily_rate, CostRange::new(850, 1200));
//! assert_eq!(result.total_for_duration, CostRange::new(2550, 3600));
//!
//! // Unknown crane or tonnage label is "not found", not an error
//! assert!(calculate_hire_cost("gantry", "50-80t", 3, "midlands", false).is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::data::{get_crane_by_id, get_region_multiplier, DurationBand, CONTRACT_LIFT_MULTIPLIER};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_half_up, CostRange};

/// Days used for the illustrative weekly saving
const SAVINGS_WEEK_DAYS: f64 = 5.0;
/// Days used for the illustrative monthly saving
const SAVINGS_MONTH_DAYS: f64 = 20.0;

/// Input parameters for a hire cost quote.
///
/// ## JSON Example
///
/// ```json
/// {
///   "crane_type_id": "all-terrain",
///   "tonnage_label": "60-100t",
///   "duration_days": 5,
///   "region_id": "london",
///   "is_contract_lift": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireCostInput {
    /// Crane type id from the catalog (e.g. "mobile")
    pub crane_type_id: String,

    /// Tonnage band label, matched exactly (e.g. "50-80t")
    pub tonnage_label: String,

    /// Hire length in days
    pub duration_days: u32,

    /// Region id (unknown ids price at the baseline)
    #[serde(default = "default_region")]
    pub region_id: String,

    /// Fully managed contract lift instead of CPA hire
    #[serde(default)]
    pub is_contract_lift: bool,
}

fn default_region() -> String {
    "midlands".to_string()
}

impl HireCostInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.crane_type_id.trim().is_empty() {
            return Err(CalcError::missing_field("crane_type_id"));
        }
        if self.tonnage_label.trim().is_empty() {
            return Err(CalcError::missing_field("tonnage_label"));
        }
        if self.duration_days == 0 {
            return Err(CalcError::invalid_input(
                "duration_days",
                self.duration_days.to_string(),
                "Hire must last at least one day",
            ));
        }
        Ok(())
    }
}

/// Illustrative savings from booking at weekly or monthly rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireSavings {
    /// Saving on a 5-day hire at the weekly discount
    pub weekly: i64,
    /// Saving on a 20-day hire at the monthly discount
    pub monthly: i64,
}

/// Results from a hire cost calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base_daily_rate": { "min": 850, "max": 1200 },
///   "region_multiplier": 1.0,
///   "regional_adjusted": { "min": 850, "max": 1200 },
///   "contract_lift_rate": null,
///   "duration_band": "daily",
///   "total_for_duration": { "min": 2550, "max": 3600 },
///   "per_day": { "min": 850, "max": 1200 },
///   "savings": { "weekly": 425, "monthly": 3400 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireCostResult {
    /// Catalog daily rate for the tonnage band
    pub base_daily_rate: CostRange,

    /// Multiplier that was applied for the region
    pub region_multiplier: f64,

    /// Daily rate after the regional multiplier
    pub regional_adjusted: CostRange,

    /// Daily rate with contract lift uplift (contract lifts only)
    pub contract_lift_rate: Option<CostRange>,

    /// Discount band the duration fell into
    pub duration_band: DurationBand,

    /// Total cost for the whole hire
    pub total_for_duration: CostRange,

    /// Effective daily rate, re-derived from the total
    pub per_day: CostRange,

    /// Illustrative weekly/monthly savings, independent of the chosen duration
    pub savings: HireSavings,
}

impl HireCostResult {
    /// Daily rate the total was computed from
    pub fn effective_rate(&self) -> CostRange {
        self.contract_lift_rate.unwrap_or(self.regional_adjusted)
    }
}

/// Price a hire from an explicit base daily rate.
///
/// This is the formula behind [`calculate_hire_cost`], usable with rates
/// that are not in the catalog.
pub fn hire_cost_from_rate(
    base_daily_rate: CostRange,
    region_multiplier: f64,
    duration_days: u32,
    is_contract_lift: bool,
) -> HireCostResult {
    let regional_adjusted = base_daily_rate.scale_round(region_multiplier);

    let contract_lift_rate = if is_contract_lift {
        Some(CONTRACT_LIFT_MULTIPLIER.apply(regional_adjusted))
    } else {
        None
    };
    let effective_rate = contract_lift_rate.unwrap_or(regional_adjusted);

    let duration_band = DurationBand::from_days(duration_days);
    let days = duration_days as f64;

    let discount = duration_band.multiplier();
    let total_for_duration = CostRange::new(
        round_half_up(effective_rate.min as f64 * days * discount),
        round_half_up(effective_rate.max as f64 * days * discount),
    );
    let per_day = total_for_duration.div_round(days);

    let savings = savings_from_rate(effective_rate.min);

    tracing::trace!(
        ?regional_adjusted,
        ?effective_rate,
        ?duration_band,
        ?total_for_duration,
        "hire cost computed"
    );

    HireCostResult {
        base_daily_rate,
        region_multiplier,
        regional_adjusted,
        contract_lift_rate,
        duration_band,
        total_for_duration,
        per_day,
        savings,
    }
}

fn savings_from_rate(daily_min: i64) -> HireSavings {
    let daily = daily_min as f64;

    let week_full = daily * SAVINGS_WEEK_DAYS;
    let week_discounted = daily * SAVINGS_WEEK_DAYS * DurationBand::Weekly.multiplier();

    let month_full = daily * SAVINGS_MONTH_DAYS;
    let month_discounted = daily * SAVINGS_MONTH_DAYS * DurationBand::Monthly.multiplier();

    HireSavings {
        weekly: round_half_up(week_full - week_discounted),
        monthly: round_half_up(month_full - month_discounted),
    }
}

/// Price a hire from the catalog.
///
/// Returns `None` when the crane type id is unknown or the tonnage label
/// does not exactly match one of its bands. An unknown region does not
/// fail; it prices at the baseline multiplier.
///
/// `duration_days` is expected to be at least 1 (see [`HireCostInput::validate`]).
pub fn calculate_hire_cost(
    crane_type_id: &str,
    tonnage_label: &str,
    duration_days: u32,
    region_id: &str,
    is_contract_lift: bool,
) -> Option<HireCostResult> {
    let Some(crane) = get_crane_by_id(crane_type_id) else {
        tracing::debug!(crane_type_id, "hire cost: unknown crane type");
        return None;
    };
    let Some(tonnage) = crane.find_tonnage(tonnage_label) else {
        tracing::debug!(crane_type_id, tonnage_label, "hire cost: unknown tonnage band");
        return None;
    };

    let region_multiplier = get_region_multiplier(region_id);

    tracing::debug!(
        crane_type_id,
        tonnage_label,
        duration_days,
        region_id,
        is_contract_lift,
        "calculating hire cost"
    );

    Some(hire_cost_from_rate(
        tonnage.daily_rate(),
        region_multiplier,
        duration_days,
        is_contract_lift,
    ))
}

/// Calculate a hire cost from validated input.
///
/// # Returns
///
/// * `Ok(HireCostResult)` - Calculation results
/// * `Err(CalcError)` - Invalid input, unknown crane type or tonnage band
pub fn calculate(input: &HireCostInput) -> CalcResult<HireCostResult> {
    input.validate()?;

    calculate_hire_cost(
        &input.crane_type_id,
        &input.tonnage_label,
        input.duration_days,
        &input.region_id,
        input.is_contract_lift,
    )
    .ok_or_else(|| match get_crane_by_id(&input.crane_type_id) {
        None => CalcError::crane_not_found(&input.crane_type_id),
        Some(_) => CalcError::tonnage_not_found(&input.crane_type_id, &input.tonnage_label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT_100: CostRange = CostRange::new(100, 100);

    fn test_input() -> HireCostInput {
        HireCostInput {
            crane_type_id: "mobile".to_string(),
            tonnage_label: "50-80t".to_string(),
            duration_days: 3,
            region_id: "midlands".to_string(),
            is_contract_lift: false,
        }
    }

    #[test]
    fn test_duration_discount_bands() {
        let total = |days| hire_cost_from_rate(FLAT_100, 1.0, days, false).total_for_duration;

        assert_eq!(total(1), CostRange::new(100, 100));
        assert_eq!(total(4), CostRange::new(400, 400));
        // 5 x 100 x 0.9
        assert_eq!(total(5), CostRange::new(450, 450));
        // 19 x 100 x 0.9, still weekly
        assert_eq!(total(19), CostRange::new(1710, 1710));
        // 20 x 100 x 0.8
        assert_eq!(total(20), CostRange::new(1600, 1600));
    }

    #[test]
    fn test_per_day_rederived_from_total() {
        let result = hire_cost_from_rate(FLAT_100, 1.0, 5, false);
        assert_eq!(result.per_day, CostRange::new(90, 90));
        assert_eq!(result.duration_band, DurationBand::Weekly);
    }

    #[test]
    fn test_contract_lift_asymmetric_scaling() {
        let result = hire_cost_from_rate(CostRange::new(100, 200), 1.0, 1, true);
        assert_eq!(result.regional_adjusted, CostRange::new(100, 200));
        assert_eq!(result.contract_lift_rate, Some(CostRange::new(180, 440)));
        assert_eq!(result.effective_rate(), CostRange::new(180, 440));
        assert_eq!(result.total_for_duration, CostRange::new(180, 440));
    }

    #[test]
    fn test_cpa_has_no_contract_rate() {
        let result = hire_cost_from_rate(CostRange::new(100, 200), 1.0, 1, false);
        assert!(result.contract_lift_rate.is_none());
        assert_eq!(result.effective_rate(), CostRange::new(100, 200));
    }

    #[test]
    fn test_savings_use_effective_min() {
        // 100/day: 500 - 450 = 50 weekly, 2000 - 1600 = 400 monthly
        let result = hire_cost_from_rate(CostRange::new(100, 300), 1.0, 1, false);
        assert_eq!(result.savings, HireSavings { weekly: 50, monthly: 400 });

        // Savings ignore the chosen duration
        let long = hire_cost_from_rate(CostRange::new(100, 300), 1.0, 30, false);
        assert_eq!(long.savings, result.savings);

        // Contract lift savings follow the uplifted min (180/day)
        let contract = hire_cost_from_rate(CostRange::new(100, 300), 1.0, 1, true);
        assert_eq!(contract.savings, HireSavings { weekly: 90, monthly: 720 });
    }

    #[test]
    fn test_catalog_rate_midlands() {
        let result = calculate_hire_cost("mobile", "50-80t", 3, "midlands", false).unwrap();
        assert_eq!(result.base_daily_rate, CostRange::new(850, 1200));
        assert_eq!(result.regional_adjusted, CostRange::new(850, 1200));
        assert_eq!(result.total_for_duration, CostRange::new(2550, 3600));
        assert_eq!(result.per_day, CostRange::new(850, 1200));
    }

    #[test]
    fn test_regional_multiplier_applied() {
        // City 13-25t in the North West: 400 x 0.95, 500 x 0.95
        let result = calculate_hire_cost("city", "13-25t", 1, "north-west", false).unwrap();
        assert_eq!(result.region_multiplier, 0.95);
        assert_eq!(result.regional_adjusted, CostRange::new(380, 475));
    }

    #[test]
    fn test_unknown_crane_or_tonnage_is_not_found() {
        assert!(calculate_hire_cost("unknown-crane", "50-80t", 5, "midlands", false).is_none());
        assert!(calculate_hire_cost("mobile", "55-80t", 5, "midlands", false).is_none());
        // Labels match exactly
        assert!(calculate_hire_cost("mobile", "50-80T", 5, "midlands", false).is_none());
    }

    #[test]
    fn test_unknown_region_prices_at_baseline() {
        let unknown = calculate_hire_cost("mobile", "50-80t", 3, "atlantis", false).unwrap();
        let midlands = calculate_hire_cost("mobile", "50-80t", 3, "midlands", false).unwrap();
        assert_eq!(unknown, midlands);
    }

    #[test]
    fn test_calculate_maps_not_found_to_errors() {
        let mut input = test_input();
        input.crane_type_id = "gantry".to_string();
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "CRANE_NOT_FOUND"
        );

        let mut input = test_input();
        input.tonnage_label = "1-2t".to_string();
        assert_eq!(
            calculate(&input).unwrap_err(),
            CalcError::tonnage_not_found("mobile", "1-2t")
        );
    }

    #[test]
    fn test_invalid_duration() {
        let mut input = test_input();
        input.duration_days = 0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_missing_crane() {
        let mut input = test_input();
        input.crane_type_id = "  ".to_string();
        assert_eq!(
            calculate(&input).unwrap_err(),
            CalcError::missing_field("crane_type_id")
        );
    }

    #[test]
    fn test_input_defaults_from_json() {
        let json = r#"{ "crane_type_id": "tower", "tonnage_label": "4-8t", "duration_days": 10 }"#;
        let input: HireCostInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.region_id, "midlands");
        assert!(!input.is_contract_lift);
        assert!(calculate(&input).is_ok());
    }
}
