//! # Crane Size Recommendation
//!
//! Estimates the crane capacity needed for a lift and suggests crane types.
//!
//! ## Method
//!
//! ```text
//! required = load_t × 1.25 (safety) × radius_factor × height_factor
//! min      = ceil(required × 0.9 / 5) × 5
//! max      = ceil(required × 1.3 / 5) × 5
//! ```
//!
//! | radius (m) | factor |    | height (m) | factor |
//! |------------|--------|----|------------|--------|
//! | > 30       | 2.0    |    | > 40       | 1.3    |
//! | > 20       | 1.6    |    | > 25       | 1.15   |
//! | > 15       | 1.4    |    | otherwise  | 1.0    |
//! | > 10       | 1.2    |    |            |        |
//! | otherwise  | 1.0    |    |            |        |
//!
//! Bands are strict: a 10 m radius gets 1.0, a 15 m radius gets 1.2.
//!
//! Candidate crane types are those whose largest band reaches the
//! recommended minimum. Soft ground always puts `crawler` at the front;
//! tight access moves `city` to the front only if it is already a
//! candidate. The list is de-duplicated and capped at four.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::calculations::crane_size::{recommend_crane_size, GroundCondition, SiteAccess};
//!
//! let rec = recommend_crane_size(5000.0, 15.0, 10.0, GroundCondition::Hard, SiteAccess::Easy);
//! assert_eq!((rec.recommended_tonnage.min, rec.recommended_tonnage.max), (10.0, 10.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::data::crane_types;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Kilograms, Tonnes, WeightUnit};

/// Margin applied to the raw load
pub const SAFETY_FACTOR: f64 = 1.25;

/// Recommendations are rounded up to multiples of this many tonnes
const TONNAGE_STEP: f64 = 5.0;

/// Maximum number of crane types suggested
const MAX_SUGGESTIONS: usize = 4;

/// Ground the crane will stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundCondition {
    /// Concrete, tarmac or compacted hardcore
    #[default]
    Hard,
    /// Grass, mud or made ground
    Soft,
}

/// Access route to the crane position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteAccess {
    /// Wide roads, no height restrictions
    #[default]
    Easy,
    /// Some width or height limitations
    Restricted,
    /// Narrow streets, limited space
    Tight,
}

/// Recommended capacity band, in tonnes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TonnageBand {
    pub min: f64,
    pub max: f64,
}

/// Results from a crane size recommendation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "required_capacity": 7.5,
///   "radius_factor": 1.2,
///   "height_factor": 1.0,
///   "recommended_tonnage": { "min": 10.0, "max": 10.0 },
///   "crane_types": ["city", "mobile", "all-terrain", "crawler"],
///   "warnings": [],
///   "notes": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraneSizeRecommendation {
    /// Load × safety × radius × height factors (tonnes)
    pub required_capacity: f64,
    pub radius_factor: f64,
    pub height_factor: f64,
    pub recommended_tonnage: TonnageBand,
    /// Up to four crane type ids, most suitable first
    pub crane_types: Vec<String>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}

/// Capacity uplift for working radius (strictly-greater-than bands)
pub fn radius_factor(radius_m: f64) -> f64 {
    if radius_m > 30.0 {
        2.0
    } else if radius_m > 20.0 {
        1.6
    } else if radius_m > 15.0 {
        1.4
    } else if radius_m > 10.0 {
        1.2
    } else {
        1.0
    }
}

/// Capacity uplift for lift height (strictly-greater-than bands)
pub fn height_factor(height_m: f64) -> f64 {
    if height_m > 40.0 {
        1.3
    } else if height_m > 25.0 {
        1.15
    } else {
        1.0
    }
}

fn round_up_to_step(tonnes: f64) -> f64 {
    (tonnes / TONNAGE_STEP).ceil() * TONNAGE_STEP
}

/// Recommend a crane size for a lift.
///
/// Total function: inputs are not validated (see [`CraneSizeInput`]).
pub fn recommend_crane_size(
    load_weight_kg: f64,
    radius_m: f64,
    height_m: f64,
    ground: GroundCondition,
    access: SiteAccess,
) -> CraneSizeRecommendation {
    let load: Tonnes = Kilograms(load_weight_kg).into();

    let radius_factor = radius_factor(radius_m);
    let height_factor = height_factor(height_m);
    let required_capacity = load.value() * SAFETY_FACTOR * radius_factor * height_factor;

    let recommended_tonnage = TonnageBand {
        min: round_up_to_step(required_capacity * 0.9),
        max: round_up_to_step(required_capacity * 1.3),
    };

    let mut candidates: Vec<String> = crane_types()
        .iter()
        .filter(|crane| crane.max_tonnage() >= recommended_tonnage.min)
        .map(|crane| crane.id.clone())
        .collect();

    let mut warnings = Vec::new();
    let mut notes = Vec::new();

    if ground == GroundCondition::Soft {
        warnings.push(
            "Soft ground conditions - crawler crane recommended or ground matting required"
                .to_string(),
        );
        if !candidates.iter().any(|id| id == "crawler") {
            candidates.insert(0, "crawler".to_string());
        }
    }

    if access == SiteAccess::Tight {
        warnings.push(
            "Tight access may limit crane options - compact city crane recommended".to_string(),
        );
        if let Some(pos) = candidates.iter().position(|id| id == "city") {
            let city = candidates.remove(pos);
            candidates.insert(0, city);
        }
    }

    if access == SiteAccess::Restricted {
        notes.push("Check access route dimensions for larger cranes".to_string());
    }

    if height_m > 30.0 {
        notes.push("Heights over 30m may require specialist lift planning".to_string());
    }

    if required_capacity > 100.0 {
        notes.push("Heavy lift - professional lift survey recommended before hire".to_string());
        warnings.push("May require heavy-lift crane or tandem lift operation".to_string());
    }

    let crane_types = dedupe_truncate(candidates, MAX_SUGGESTIONS);

    tracing::debug!(
        load_weight_kg,
        radius_m,
        height_m,
        required_capacity,
        min = recommended_tonnage.min,
        max = recommended_tonnage.max,
        "crane size recommended"
    );

    CraneSizeRecommendation {
        required_capacity,
        radius_factor,
        height_factor,
        recommended_tonnage,
        crane_types,
        warnings,
        notes,
    }
}

/// Keep first occurrences, in order, up to `limit` entries
fn dedupe_truncate(ids: Vec<String>, limit: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(limit);
    for id in ids {
        if out.len() == limit {
            break;
        }
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// Input parameters for a crane size recommendation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_weight": 2.5,
///   "weight_unit": "tonnes",
///   "radius_m": 18.0,
///   "height_m": 12.0,
///   "ground_condition": "soft",
///   "site_access": "easy"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraneSizeInput {
    /// Load weight in `weight_unit`
    pub load_weight: f64,

    #[serde(default)]
    pub weight_unit: WeightUnit,

    /// Horizontal distance from crane centre to load placement (m)
    pub radius_m: f64,

    /// Lift height (m)
    pub height_m: f64,

    #[serde(default)]
    pub ground_condition: GroundCondition,

    #[serde(default)]
    pub site_access: SiteAccess,
}

impl CraneSizeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("load_weight", self.load_weight),
            ("radius_m", self.radius_m),
            ("height_m", self.height_m),
        ];
        for (field, value) in fields {
            if !(value > 0.0) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        Ok(())
    }

    pub fn load_weight_kg(&self) -> Kilograms {
        self.weight_unit.to_kilograms(self.load_weight)
    }
}

/// Recommend a crane size from validated input.
pub fn calculate(input: &CraneSizeInput) -> CalcResult<CraneSizeRecommendation> {
    input.validate()?;

    Ok(recommend_crane_size(
        input.load_weight_kg().value(),
        input.radius_m,
        input.height_m,
        input.ground_condition,
        input.site_access,
    ))
}
