//! # Transport Cost Calculation
//!
//! One-way cost of moving a crane to site. The crane's capacity picks a
//! size class (small `< 50t`, medium `< 100t`, large `< 200t`, heavy), and
//! the class fixes a base mobilisation cost, a per-mile rate and, for large
//! and heavy cranes, an escort vehicle cost.
//!
//! [`calculate_transport_cost`] is total: any tonnage or distance is
//! accepted, and nonsensical inputs (negative miles) flow straight through
//! the formula. [`calculate`] validates a [`TransportInput`] first and adds
//! the return trip and advisory notes.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::calculations::transport_cost::calculate_transport_cost;
//! use crane_core::units::CostRange;
//!
//! let result = calculate_transport_cost(40.0, 25.0);
//! assert_eq!(result.total, CostRange::new(150, 275));
//! assert!(!result.escort_required);
//! ```

use serde::{Deserialize, Serialize};

use crate::data::TransportClass;
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_half_up, CostRange};

/// One-way distance above which overnight costs are flagged
const LONG_DISTANCE_MILES: f64 = 100.0;

/// Results from a one-way transport cost calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportCostResult {
    /// Size class the tonnage fell into
    pub class: TransportClass,
    /// Fixed mobilisation cost
    pub base_cost: CostRange,
    /// Per-mile cost times distance
    pub mileage_cost: CostRange,
    /// Escort vehicle cost, when the class requires one
    pub escort_cost: Option<CostRange>,
    /// Base + mileage + escort
    pub total: CostRange,
    pub escort_required: bool,
}

/// One-way transport cost for a crane of `tonnage` over `distance_miles`.
///
/// Round trips are the caller's concern; double [`TransportCostResult::total`].
pub fn calculate_transport_cost(tonnage: f64, distance_miles: f64) -> TransportCostResult {
    let class = TransportClass::from_tonnage(tonnage);
    let config = class.config();

    let base_cost = config.base_cost;
    let mileage_cost = CostRange::new(
        round_half_up(config.per_mile.min as f64 * distance_miles),
        round_half_up(config.per_mile.max as f64 * distance_miles),
    );
    let escort_cost = config.escort_required.then_some(config.escort_cost);

    let total = base_cost + mileage_cost + escort_cost.unwrap_or(CostRange::ZERO);

    tracing::debug!(tonnage, distance_miles, ?class, ?total, "transport cost computed");

    TransportCostResult {
        class,
        base_cost,
        mileage_cost,
        escort_cost,
        total,
        escort_required: config.escort_required,
    }
}

/// Input parameters for a transport quote.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tonnage": 120.0,
///   "distance_miles": 60.0,
///   "include_return": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportInput {
    /// Crane capacity in tonnes
    pub tonnage: f64,

    /// One-way distance to site in miles
    pub distance_miles: f64,

    /// Quote the return trip as well
    #[serde(default = "default_true")]
    pub include_return: bool,
}

fn default_true() -> bool {
    true
}

impl TransportInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.tonnage > 0.0) {
            return Err(CalcError::invalid_input(
                "tonnage",
                self.tonnage.to_string(),
                "Crane tonnage must be positive",
            ));
        }
        if !(self.distance_miles > 0.0) {
            return Err(CalcError::invalid_input(
                "distance_miles",
                self.distance_miles.to_string(),
                "Distance must be positive",
            ));
        }
        Ok(())
    }
}

/// Transport quote with return trip and advisory notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSummary {
    pub tonnage: f64,
    pub distance_miles: f64,
    /// Display name of the size class ("Super Heavy" for the heavy class)
    pub category: String,
    /// One-way breakdown
    pub one_way: TransportCostResult,
    /// One-way total doubled
    pub total_return: CostRange,
    /// The figure to quote: return total if requested, else one-way
    pub quoted_total: CostRange,
    pub include_return: bool,
    pub notes: Vec<String>,
}

fn transport_notes(tonnage: f64, distance_miles: f64, escort_required: bool) -> Vec<String> {
    let mut notes = Vec::new();

    if tonnage >= 100.0 {
        notes.push("Large cranes may require route surveys before transport".to_string());
    }
    if tonnage >= 200.0 {
        notes.push("Super heavy cranes often need multiple transport loads".to_string());
        notes.push("Police escort may be required for some routes".to_string());
    }
    if distance_miles > LONG_DISTANCE_MILES {
        notes.push("Long distance transport may have overnight costs".to_string());
    }
    if escort_required {
        notes.push("Escort vehicle(s) required for this crane size".to_string());
    }

    notes
}

/// Calculate a transport quote from validated input.
pub fn calculate(input: &TransportInput) -> CalcResult<TransportSummary> {
    input.validate()?;

    let one_way = calculate_transport_cost(input.tonnage, input.distance_miles);
    let total_return = one_way.total * 2;

    Ok(TransportSummary {
        tonnage: input.tonnage,
        distance_miles: input.distance_miles,
        category: one_way.class.display_name().to_string(),
        one_way,
        total_return,
        quoted_total: if input.include_return { total_return } else { one_way.total },
        include_return: input.include_return,
        notes: transport_notes(input.tonnage, input.distance_miles, one_way.escort_required),
    })
}
