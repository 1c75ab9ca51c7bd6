//! # Error Types
//!
//! Structured error types for crane_core. The raw pricing formulas never
//! fail (an unknown crane or tonnage label is `None`, an unknown region
//! prices at the baseline multiplier). These errors are produced by the
//! `*Input` boundary wrappers, which validate form values before handing
//! them to the formulas.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::errors::{CalcError, CalcResult};
//!
//! fn validate_duration(duration_days: u32) -> CalcResult<()> {
//!     if duration_days == 0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "duration_days".to_string(),
//!             value: duration_days.to_string(),
//!             reason: "Hire must last at least one day".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for crane_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Crane type id not in the catalog
    #[error("Crane type not found: {crane_id}")]
    CraneNotFound { crane_id: String },

    /// Tonnage label not offered by the crane type
    #[error("Tonnage '{label}' not available for crane type '{crane_id}'")]
    TonnageNotFound { crane_id: String, label: String },

    /// Region id not in the catalog (only raised where a region is mandatory)
    #[error("Region not found: {region_id}")]
    RegionNotFound { region_id: String },

    /// Calculation document could not be parsed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CraneNotFound error
    pub fn crane_not_found(crane_id: impl Into<String>) -> Self {
        CalcError::CraneNotFound {
            crane_id: crane_id.into(),
        }
    }

    /// Create a TonnageNotFound error
    pub fn tonnage_not_found(crane_id: impl Into<String>, label: impl Into<String>) -> Self {
        CalcError::TonnageNotFound {
            crane_id: crane_id.into(),
            label: label.into(),
        }
    }

    /// Create a RegionNotFound error
    pub fn region_not_found(region_id: impl Into<String>) -> Self {
        CalcError::RegionNotFound {
            region_id: region_id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CraneNotFound { .. } => "CRANE_NOT_FOUND",
            CalcError::TonnageNotFound { .. } => "TONNAGE_NOT_FOUND",
            CalcError::RegionNotFound { .. } => "REGION_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
