//! # Reference Data
//!
//! Static catalogs the calculators read from. Everything here is built
//! once on first access and never mutated, so lookups are safe from any
//! thread.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::data::{get_crane_by_id, get_region_multiplier, get_tonnage_options};
//!
//! let crane = get_crane_by_id("mobile").unwrap();
//! assert_eq!(crane.tonnage_ranges.len(), 4);
//!
//! // Unknown ids: empty options, baseline multiplier
//! assert!(get_tonnage_options("gantry").is_empty());
//! assert_eq!(get_region_multiplier("atlantis"), 1.0);
//! ```

pub mod crane_types;
pub mod pricing;
pub mod regions;

pub use crane_types::{crane_types, get_crane_by_id, get_tonnage_options, CraneType, TonnageRange};
pub use pricing::{
    duration_multiplier, AncillaryCosts, ContractLiftMultiplier, DurationBand, TransportClass,
    TransportCostConfig, ANCILLARY_COSTS, CONTRACT_LIFT_MULTIPLIER, CPA_EXTRAS_PER_DAY,
};
pub use regions::{get_region_by_id, get_region_multiplier, regions, Region, BASELINE_MULTIPLIER};
