//! # CPA vs Contract Lift Comparison
//!
//! Compares a bare CPA hire (crane plus operator, customer supplies the
//! Appointed Person, slinger and insurance) with a fully managed contract
//! lift for the same crane, region and duration, then recommends one.
//!
//! The CPA side is compared both bare and with typical daily extras
//! ([`CPA_EXTRAS_PER_DAY`]), since those costs land on the customer anyway.

use serde::{Deserialize, Serialize};

use crate::calculations::hire_cost::hire_cost_from_rate;
use crate::data::{get_crane_by_id, get_region_by_id, CPA_EXTRAS_PER_DAY};
use crate::errors::{CalcError, CalcResult};
use crate::units::CostRange;

/// How involved the lift is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftComplexity {
    Simple,
    Moderate,
    Complex,
}

/// Which hire type the comparison favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HireRecommendation {
    Cpa,
    Contract,
    Either,
}

impl HireRecommendation {
    pub fn display_name(&self) -> &'static str {
        match self {
            HireRecommendation::Cpa => "CPA Hire",
            HireRecommendation::Contract => "Contract Lift",
            HireRecommendation::Either => "Either Option",
        }
    }
}

/// Input parameters for a CPA vs contract lift comparison.
///
/// The capability answers are optional: an unanswered question neither
/// pushes toward nor away from CPA hire.
///
/// ## JSON Example
///
/// ```json
/// {
///   "crane_type_id": "mobile",
///   "tonnage_label": "35-50t",
///   "duration_days": 3,
///   "region_id": "scotland",
///   "has_appointed_person": true,
///   "has_insurance": true,
///   "lift_complexity": "simple"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireComparisonInput {
    pub crane_type_id: String,
    pub tonnage_label: String,
    pub duration_days: u32,
    pub region_id: String,
    #[serde(default)]
    pub has_appointed_person: Option<bool>,
    #[serde(default)]
    pub has_insurance: Option<bool>,
    #[serde(default)]
    pub lift_complexity: Option<LiftComplexity>,
}

impl HireComparisonInput {
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

/// Results from a CPA vs contract lift comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireComparison {
    pub crane_name: String,
    pub tonnage_label: String,
    pub region_name: String,
    pub duration_days: u32,
    /// Regional CPA daily rate
    pub cpa_daily: CostRange,
    /// Contract lift daily rate
    pub contract_daily: CostRange,
    pub cpa_total_hire: CostRange,
    pub contract_total_hire: CostRange,
    /// CPA total plus typical daily extras
    pub cpa_with_extras: CostRange,
    /// Contract total minus CPA-with-extras, per bound
    pub difference: CostRange,
    pub recommendation: HireRecommendation,
    pub reasons: Vec<String>,
}

fn recommend(input: &HireComparisonInput) -> (HireRecommendation, Vec<String>) {
    let mut recommendation = HireRecommendation::Either;
    let mut reasons = Vec::new();

    if input.has_appointed_person == Some(false) {
        recommendation = HireRecommendation::Contract;
        reasons.push("You do not have an Appointed Person - required for CPA hire".to_string());
    }
    if input.has_insurance == Some(false) {
        recommendation = HireRecommendation::Contract;
        reasons.push("You need lifting operation insurance for CPA hire".to_string());
    }
    if input.lift_complexity == Some(LiftComplexity::Complex) {
        recommendation = HireRecommendation::Contract;
        reasons.push("Complex lifts benefit from full crane company management".to_string());
    }

    let capable = input.has_appointed_person == Some(true) && input.has_insurance == Some(true);

    if capable && input.lift_complexity == Some(LiftComplexity::Simple) {
        recommendation = HireRecommendation::Cpa;
        reasons.push("You have the expertise and insurance for CPA hire".to_string());
        reasons.push("Simple lift does not require additional management".to_string());
    }

    if recommendation == HireRecommendation::Either {
        if capable {
            reasons.push("You have the capability for CPA hire".to_string());
            reasons.push(
                "Contract lift still offers convenience and liability transfer".to_string(),
            );
        } else {
            reasons.push("Consider your specific requirements carefully".to_string());
        }
    }

    (recommendation, reasons)
}

/// Compare CPA hire with a contract lift.
///
/// Unlike the hire cost calculator, the region must exist here: the
/// comparison reports the region by name.
pub fn calculate(input: &HireComparisonInput) -> CalcResult<HireComparison> {
    input.validate()?;

    let crane = get_crane_by_id(&input.crane_type_id)
        .ok_or_else(|| CalcError::crane_not_found(&input.crane_type_id))?;
    let tonnage = crane
        .find_tonnage(&input.tonnage_label)
        .ok_or_else(|| CalcError::tonnage_not_found(&input.crane_type_id, &input.tonnage_label))?;
    let region = get_region_by_id(&input.region_id)
        .ok_or_else(|| CalcError::region_not_found(&input.region_id))?;

    let rate = tonnage.daily_rate();
    let cpa = hire_cost_from_rate(rate, region.multiplier, input.duration_days, false);
    let contract = hire_cost_from_rate(rate, region.multiplier, input.duration_days, true);

    let cpa_daily = cpa.effective_rate();
    let contract_daily = contract.effective_rate();
    let cpa_total_hire = cpa.total_for_duration;
    let contract_total_hire = contract.total_for_duration;

    let cpa_with_extras = cpa_total_hire + CPA_EXTRAS_PER_DAY * input.duration_days as i64;
    let difference = contract_total_hire - cpa_with_extras;

    let (recommendation, reasons) = recommend(input);

    tracing::debug!(
        crane = %crane.id,
        region = %region.id,
        ?recommendation,
        "hire comparison computed"
    );

    Ok(HireComparison {
        crane_name: crane.name.clone(),
        tonnage_label: tonnage.label.clone(),
        region_name: region.name.clone(),
        duration_days: input.duration_days,
        cpa_daily,
        contract_daily,
        cpa_total_hire,
        contract_total_hire,
        cpa_with_extras,
        difference,
        recommendation,
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> HireComparisonInput {
        HireComparisonInput {
            crane_type_id: "mobile".to_string(),
            tonnage_label: "35-50t".to_string(),
            duration_days: 2,
            region_id: "midlands".to_string(),
            has_appointed_person: None,
            has_insurance: None,
            lift_complexity: None,
        }
    }

    #[test]
    fn test_rates_and_totals() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.cpa_daily, CostRange::new(700, 900));
        // 700 x 1.8, 900 x 2.2
        assert_eq!(result.contract_daily, CostRange::new(1260, 1980));
        assert_eq!(result.cpa_total_hire, CostRange::new(1400, 1800));
        assert_eq!(result.contract_total_hire, CostRange::new(2520, 3960));
        // + 550-1030 per day for two days
        assert_eq!(result.cpa_with_extras, CostRange::new(2500, 3860));
        assert_eq!(result.difference, CostRange::new(20, 100));
        assert_eq!(result.region_name, "Midlands");
    }

    #[test]
    fn test_duration_discount_applies_to_both() {
        let mut input = test_input();
        input.duration_days = 5;
        let result = calculate(&input).unwrap();
        // 700 x 5 x 0.9
        assert_eq!(result.cpa_total_hire.min, 3150);
        // 1260 x 5 x 0.9
        assert_eq!(result.contract_total_hire.min, 5670);
    }

    #[test]
    fn test_unanswered_is_either() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.recommendation, HireRecommendation::Either);
        assert_eq!(result.reasons, vec!["Consider your specific requirements carefully"]);
    }

    #[test]
    fn test_missing_capability_forces_contract() {
        let mut input = test_input();
        input.has_appointed_person = Some(false);
        input.has_insurance = Some(false);
        input.lift_complexity = Some(LiftComplexity::Complex);
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendation, HireRecommendation::Contract);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn test_capable_simple_lift_is_cpa() {
        let mut input = test_input();
        input.has_appointed_person = Some(true);
        input.has_insurance = Some(true);
        input.lift_complexity = Some(LiftComplexity::Simple);
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendation, HireRecommendation::Cpa);
        assert_eq!(result.reasons.len(), 2);
    }

    #[test]
    fn test_capable_moderate_lift_is_either() {
        let mut input = test_input();
        input.has_appointed_person = Some(true);
        input.has_insurance = Some(true);
        input.lift_complexity = Some(LiftComplexity::Moderate);
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendation, HireRecommendation::Either);
        assert_eq!(result.reasons[0], "You have the capability for CPA hire");
    }

    #[test]
    fn test_unknown_region_is_an_error_here() {
        let mut input = test_input();
        input.region_id = "atlantis".to_string();
        assert_eq!(
            calculate(&input).unwrap_err(),
            CalcError::region_not_found("atlantis")
        );
    }
}
