//! # crane_core - Crane Hire Pricing Engine
//!
//! `crane_core` prices UK crane hire: daily hire cost by crane type, capacity
//! band, region and duration, transport to site, and a recommended crane
//! capacity for a described lift. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over a static reference catalog
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types at the validation boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use crane_core::calculations::hire_cost::calculate_hire_cost;
//!
//! let quote = calculate_hire_cost("mobile", "50-80t", 5, "london", false).unwrap();
//! assert_eq!(quote.regional_adjusted.min, 1105);
//!
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! assert!(json.contains("total_for_duration"));
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Crane catalog, regional multipliers and pricing constants
//! - [`calculations`] - Hire, transport, sizing, comparison and project cost
//! - [`format`] - Currency and multiplier display strings
//! - [`units`] - Weight units and the [`CostRange`] money type
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod data;
pub mod errors;
pub mod format;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{parse_items, CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use units::CostRange;
