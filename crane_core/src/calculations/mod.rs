//! # Pricing Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Validates, then prices
//!
//! The hire, transport and sizing modules also expose the underlying
//! formula (`calculate_hire_cost`, `calculate_transport_cost`,
//! `recommend_crane_size`) as plain functions that never fail: unknown
//! catalog entries come back as `None` instead of an error.
//!
//! ## Available Calculations
//!
//! - [`hire_cost`] - Daily rate, duration discount and contract lift premium
//! - [`transport_cost`] - Mobilisation, mileage and escort costs
//! - [`crane_size`] - Capacity needed for a load at radius and height
//! - [`hire_comparison`] - CPA hire vs contract lift
//! - [`project_cost`] - Whole-job budget with extras and contingency

pub mod crane_size;
pub mod hire_comparison;
pub mod hire_cost;
pub mod project_cost;
pub mod transport_cost;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use crane_size::{recommend_crane_size, CraneSizeInput, CraneSizeRecommendation};
pub use hire_comparison::{HireComparison, HireComparisonInput};
pub use hire_cost::{calculate_hire_cost, HireCostInput, HireCostResult};
pub use project_cost::{ProjectCostInput, ProjectCostResult};
pub use transport_cost::{
    calculate_transport_cost, TransportCostResult, TransportInput, TransportSummary,
};

/// Enum wrapper for all calculation types.
///
/// Lets a batch of quotes live in one JSON document:
///
/// ```json
/// [
///   { "type": "HireCost", "crane_type_id": "city", "tonnage_label": "13-25t" },
///   { "type": "Transport", "tonnage": 40.0, "distance_miles": 25.0 }
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    HireCost(HireCostInput),
    Transport(TransportInput),
    CraneSize(CraneSizeInput),
    HireComparison(HireComparisonInput),
    ProjectCost(ProjectCostInput),
}

/// Result of running a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    HireCost(HireCostResult),
    Transport(TransportSummary),
    CraneSize(CraneSizeRecommendation),
    HireComparison(HireComparison),
    ProjectCost(ProjectCostResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::HireCost(_) => "HireCost",
            CalculationItem::Transport(_) => "Transport",
            CalculationItem::CraneSize(_) => "CraneSize",
            CalculationItem::HireComparison(_) => "HireComparison",
            CalculationItem::ProjectCost(_) => "ProjectCost",
        }
    }

    /// Validate and run the wrapped calculation.
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        tracing::debug!(calc_type = self.calc_type(), "running calculation");

        let output = match self {
            CalculationItem::HireCost(input) => {
                CalculationOutput::HireCost(hire_cost::calculate(input)?)
            }
            CalculationItem::Transport(input) => {
                CalculationOutput::Transport(transport_cost::calculate(input)?)
            }
            CalculationItem::CraneSize(input) => {
                CalculationOutput::CraneSize(crane_size::calculate(input)?)
            }
            CalculationItem::HireComparison(input) => {
                CalculationOutput::HireComparison(hire_comparison::calculate(input)?)
            }
            CalculationItem::ProjectCost(input) => {
                CalculationOutput::ProjectCost(project_cost::calculate(input)?)
            }
        };
        Ok(output)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CalculationDocument {
    Many(Vec<CalculationItem>),
    One(CalculationItem),
}

/// Parse a calculation document: a single tagged item or an array of them.
///
/// # Errors
///
/// * `CalcError::SerializationError` - Malformed JSON or an unknown `type` tag
pub fn parse_items(json: &str) -> CalcResult<Vec<CalculationItem>> {
    let items = match serde_json::from_str::<CalculationDocument>(json)? {
        CalculationDocument::Many(items) => items,
        CalculationDocument::One(item) => vec![item],
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_item_from_json() {
        let json = r#"{
            "type": "HireCost",
            "crane_type_id": "city",
            "tonnage_label": "13-25t",
            "duration_days": 3
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "HireCost");

        match item.run().unwrap() {
            CalculationOutput::HireCost(result) => {
                assert_eq!(result.total_for_duration.min, 1200);
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_batch_of_items() {
        let json = r#"[
            {
                "type": "Transport", "tonnage": 40.0, "distance_miles": 25.0,
                "include_return": false
            },
            { "type": "CraneSize", "load_weight": 5000, "radius_m": 15, "height_m": 10 }
        ]"#;
        let items: Vec<CalculationItem> = serde_json::from_str(json).unwrap();
        let outputs: Vec<CalculationOutput> = items.iter().map(|i| i.run().unwrap()).collect();
        assert_eq!(outputs.len(), 2);
        assert!(matches!(outputs[0], CalculationOutput::Transport(_)));
        assert!(matches!(outputs[1], CalculationOutput::CraneSize(_)));
    }

    #[test]
    fn test_parse_single_and_list() {
        let json = r#"{ "type": "Transport", "tonnage": 40.0, "distance_miles": 25.0 }"#;
        let one = parse_items(json).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_items(
            r#"[
                { "type": "Transport", "tonnage": 40.0, "distance_miles": 25.0 },
                { "type": "CraneSize", "load_weight": 5000, "radius_m": 15, "height_m": 10 }
            ]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_documents() {
        let err = parse_items("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = parse_items(r#"{ "type": "Gantry", "tonnage": 40.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_run_propagates_lookup_errors() {
        let item = CalculationItem::HireCost(HireCostInput {
            crane_type_id: "gantry".to_string(),
            tonnage_label: "10t".to_string(),
            duration_days: 1,
            region_id: "midlands".to_string(),
            is_contract_lift: false,
        });
        assert_eq!(item.run().unwrap_err().error_code(), "CRANE_NOT_FOUND");
    }

    #[test]
    fn test_output_serializes_with_type_tag() {
        let item = CalculationItem::Transport(TransportInput {
            tonnage: 120.0,
            distance_miles: 60.0,
            include_return: true,
        });
        let json = serde_json::to_value(item.run().unwrap()).unwrap();
        assert_eq!(json["type"], "Transport");
        assert_eq!(json["category"], "Large");
    }
}
