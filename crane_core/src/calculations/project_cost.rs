//! # Total Project Cost
//!
//! Rolls a hire quote up into a whole-job budget:
//!
//! - Hire cost (see [`hire_cost`](super::hire_cost))
//! - Transport there and back, sized on the tonnage band's midpoint
//! - CPA only: slingers, Appointed Person and lifting insurance
//! - Road closure and airspace permits
//! - A contingency percentage on the subtotal
//!
//! Contract lifts already include crew and insurance, so those lines are
//! skipped for them.

use serde::{Deserialize, Serialize};

use crate::calculations::hire_cost::hire_cost_from_rate;
use crate::calculations::transport_cost::calculate_transport_cost;
use crate::data::{get_crane_by_id, get_region_by_id, ANCILLARY_COSTS};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_half_up, CostRange};

/// Upper bound accepted for the contingency percentage
const MAX_CONTINGENCY_PERCENT: u32 = 100;

/// Hire arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HireType {
    /// Crane plus operator; customer supplies crew, planning and insurance
    Cpa,
    /// Fully managed by the crane company
    #[default]
    Contract,
}

impl HireType {
    pub fn is_contract_lift(&self) -> bool {
        matches!(self, HireType::Contract)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HireType::Cpa => "CPA Hire",
            HireType::Contract => "Contract Lift",
        }
    }
}

/// Input parameters for a total project cost estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "crane_type_id": "mobile",
///   "tonnage_label": "50-80t",
///   "duration_days": 2,
///   "region_id": "midlands",
///   "hire_type": "cpa",
///   "transport_distance_miles": 25.0,
///   "num_slingers": 1,
///   "needs_appointed_person": true,
///   "needs_road_closure": true,
///   "needs_airspace": false,
///   "contingency_percent": 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCostInput {
    pub crane_type_id: String,
    pub tonnage_label: String,
    pub duration_days: u32,
    pub region_id: String,
    #[serde(default)]
    pub hire_type: HireType,
    /// One-way distance to site
    pub transport_distance_miles: f64,
    /// Slingers supplied by the customer (CPA only)
    #[serde(default = "default_slingers")]
    pub num_slingers: u32,
    /// Customer-supplied Appointed Person (CPA only)
    #[serde(default = "default_true")]
    pub needs_appointed_person: bool,
    #[serde(default)]
    pub needs_road_closure: bool,
    #[serde(default)]
    pub needs_airspace: bool,
    #[serde(default = "default_contingency")]
    pub contingency_percent: u32,
}

fn default_slingers() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_contingency() -> u32 {
    10
}

impl ProjectCostInput {
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
        if !(self.transport_distance_miles > 0.0) {
            return Err(CalcError::invalid_input(
                "transport_distance_miles",
                self.transport_distance_miles.to_string(),
                "Distance must be positive",
            ));
        }
        if self.contingency_percent > MAX_CONTINGENCY_PERCENT {
            return Err(CalcError::invalid_input(
                "contingency_percent",
                self.contingency_percent.to_string(),
                "Contingency cannot exceed 100%",
            ));
        }
        Ok(())
    }
}

/// One extra cost line in the project breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub label: String,
    pub cost: CostRange,
    /// Already covered by the hire price
    pub included: bool,
}

/// Results from a total project cost estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCostResult {
    pub crane_name: String,
    pub tonnage_label: String,
    pub region_name: String,
    pub duration_days: u32,
    pub hire_type: HireType,

    pub hire_cost: CostRange,
    /// Return trip
    pub transport_cost: CostRange,
    pub crew_cost: CostRange,
    pub permits_cost: CostRange,
    pub insurance_cost: CostRange,

    pub subtotal: CostRange,
    pub contingency: CostRange,
    pub grand_total: CostRange,

    /// Grand total spread over the hire days
    pub per_day: CostRange,

    /// Itemised crew, permit and insurance lines
    pub breakdown: Vec<CostLine>,
}

/// Estimate the total cost of a lifting project.
pub fn calculate(input: &ProjectCostInput) -> CalcResult<ProjectCostResult> {
    input.validate()?;

    let crane = get_crane_by_id(&input.crane_type_id)
        .ok_or_else(|| CalcError::crane_not_found(&input.crane_type_id))?;
    let tonnage = crane
        .find_tonnage(&input.tonnage_label)
        .ok_or_else(|| CalcError::tonnage_not_found(&input.crane_type_id, &input.tonnage_label))?;
    let region = get_region_by_id(&input.region_id)
        .ok_or_else(|| CalcError::region_not_found(&input.region_id))?;

    let days = input.duration_days as i64;
    let is_cpa = input.hire_type == HireType::Cpa;

    let hire = hire_cost_from_rate(
        tonnage.daily_rate(),
        region.multiplier,
        input.duration_days,
        input.hire_type.is_contract_lift(),
    );

    let transport = calculate_transport_cost(tonnage.midpoint(), input.transport_distance_miles);
    let transport_cost = transport.total * 2;

    let mut breakdown = Vec::new();
    let mut crew_cost = CostRange::ZERO;

    if is_cpa {
        if input.num_slingers > 0 {
            let slinger_cost =
                ANCILLARY_COSTS.crew.slinger.daily * input.num_slingers as i64 * days;
            crew_cost += slinger_cost;
            breakdown.push(CostLine {
                label: format!(
                    "Slinger{} ({} × {} days)",
                    if input.num_slingers > 1 { "s" } else { "" },
                    input.num_slingers,
                    input.duration_days
                ),
                cost: slinger_cost,
                included: false,
            });
        }

        if input.needs_appointed_person {
            let ap_cost = ANCILLARY_COSTS.crew.operator.daily * days;
            crew_cost += ap_cost;
            breakdown.push(CostLine {
                label: format!("Appointed Person ({} days)", input.duration_days),
                cost: ap_cost,
                included: false,
            });
        }
    }

    let mut permits_cost = CostRange::ZERO;
    if input.needs_road_closure {
        permits_cost += ANCILLARY_COSTS.permit.road_closure;
        breakdown.push(CostLine {
            label: "Road Closure Permit".to_string(),
            cost: ANCILLARY_COSTS.permit.road_closure,
            included: false,
        });
    }
    if input.needs_airspace {
        permits_cost += ANCILLARY_COSTS.permit.airspace;
        breakdown.push(CostLine {
            label: "Airspace Permit".to_string(),
            cost: ANCILLARY_COSTS.permit.airspace,
            included: false,
        });
    }

    let insurance_cost = if is_cpa {
        let cost = ANCILLARY_COSTS.insurance_daily * days;
        breakdown.push(CostLine {
            label: format!("Lifting Insurance ({} days)", input.duration_days),
            cost,
            included: false,
        });
        cost
    } else {
        CostRange::ZERO
    };

    let subtotal =
        hire.total_for_duration + transport_cost + crew_cost + permits_cost + insurance_cost;

    let contingency_rate = input.contingency_percent as f64 / 100.0;
    let contingency = CostRange::new(
        round_half_up(subtotal.min as f64 * contingency_rate),
        round_half_up(subtotal.max as f64 * contingency_rate),
    );
    let grand_total = subtotal + contingency;
    let per_day = grand_total.div_round(input.duration_days as f64);

    tracing::debug!(
        crane = %crane.id,
        tonnage = %tonnage.label,
        region = %region.id,
        hire_type = ?input.hire_type,
        ?grand_total,
        "project cost computed"
    );

    Ok(ProjectCostResult {
        crane_name: crane.name.clone(),
        tonnage_label: tonnage.label.clone(),
        region_name: region.name.clone(),
        duration_days: input.duration_days,
        hire_type: input.hire_type,
        hire_cost: hire.total_for_duration,
        transport_cost,
        crew_cost,
        permits_cost,
        insurance_cost,
        subtotal,
        contingency,
        grand_total,
        per_day,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpa_input() -> ProjectCostInput {
        ProjectCostInput {
            crane_type_id: "mobile".to_string(),
            tonnage_label: "50-80t".to_string(),
            duration_days: 2,
            region_id: "midlands".to_string(),
            hire_type: HireType::Cpa,
            transport_distance_miles: 25.0,
            num_slingers: 1,
            needs_appointed_person: true,
            needs_road_closure: true,
            needs_airspace: false,
            contingency_percent: 10,
        }
    }

    #[test]
    fn test_cpa_project_totals() {
        let result = calculate(&cpa_input()).unwrap();

        assert_eq!(result.hire_cost, CostRange::new(1700, 2400));
        // 65t midpoint is medium: (200-350 + 75-125) x 2
        assert_eq!(result.transport_cost, CostRange::new(550, 950));
        // slinger 320-560 + AP 400-800
        assert_eq!(result.crew_cost, CostRange::new(720, 1360));
        assert_eq!(result.permits_cost, CostRange::new(100, 250));
        assert_eq!(result.insurance_cost, CostRange::new(100, 300));

        assert_eq!(result.subtotal, CostRange::new(3170, 5260));
        assert_eq!(result.contingency, CostRange::new(317, 526));
        assert_eq!(result.grand_total, CostRange::new(3487, 5786));
        // 3487 / 2 = 1743.5 rounds up
        assert_eq!(result.per_day, CostRange::new(1744, 2893));
    }

    #[test]
    fn test_cpa_breakdown_lines() {
        let result = calculate(&cpa_input()).unwrap();
        let labels: Vec<&str> = result.breakdown.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Slinger (1 × 2 days)",
                "Appointed Person (2 days)",
                "Road Closure Permit",
                "Lifting Insurance (2 days)",
            ]
        );
        assert!(result.breakdown.iter().all(|l| !l.included));
    }

    #[test]
    fn test_contract_lift_skips_crew_and_insurance() {
        let mut input = cpa_input();
        input.hire_type = HireType::Contract;
        input.needs_road_closure = false;
        let result = calculate(&input).unwrap();

        // 850 x 1.8 x 2, 1200 x 2.2 x 2
        assert_eq!(result.hire_cost, CostRange::new(3060, 5280));
        assert!(result.crew_cost.is_zero());
        assert!(result.insurance_cost.is_zero());
        assert!(result.breakdown.is_empty());
        assert_eq!(result.subtotal, result.hire_cost + result.transport_cost);
    }

    #[test]
    fn test_plural_slingers_and_airspace() {
        let mut input = cpa_input();
        input.num_slingers = 2;
        input.needs_appointed_person = false;
        input.needs_road_closure = false;
        input.needs_airspace = true;
        let result = calculate(&input).unwrap();
        assert_eq!(result.breakdown[0].label, "Slingers (2 × 2 days)");
        assert_eq!(result.crew_cost, CostRange::new(640, 1120));
        assert_eq!(result.permits_cost, CostRange::new(150, 300));
    }

    #[test]
    fn test_zero_contingency() {
        let mut input = cpa_input();
        input.contingency_percent = 0;
        let result = calculate(&input).unwrap();
        assert!(result.contingency.is_zero());
        assert_eq!(result.grand_total, result.subtotal);
    }

    #[test]
    fn test_huge_crew_and_duration_saturate() {
        let mut input = cpa_input();
        input.duration_days = u32::MAX;
        input.num_slingers = u32::MAX;
        let result = calculate(&input).unwrap();
        assert_eq!(result.crew_cost, CostRange::new(i64::MAX, i64::MAX));
        assert_eq!(result.grand_total, CostRange::new(i64::MAX, i64::MAX));
        assert!(result.per_day.min > 0);
    }

    #[test]
    fn test_validation() {
        let mut input = cpa_input();
        input.contingency_percent = 150;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = cpa_input();
        input.region_id = "atlantis".to_string();
        assert_eq!(calculate(&input).unwrap_err().error_code(), "REGION_NOT_FOUND");

        let mut input = cpa_input();
        input.tonnage_label = "1-3t".to_string();
        assert_eq!(calculate(&input).unwrap_err().error_code(), "TONNAGE_NOT_FOUND");
    }

    #[test]
    fn test_defaults_from_json() {
        let json = r#"{
            "crane_type_id": "city",
            "tonnage_label": "13-25t",
            "duration_days": 1,
            "region_id": "london",
            "transport_distance_miles": 10
        }"#;
        let input: ProjectCostInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.hire_type, HireType::Contract);
        assert_eq!(input.num_slingers, 1);
        assert!(input.needs_appointed_person);
        assert_eq!(input.contingency_percent, 10);
        assert!(calculate(&input).is_ok());
    }
}
