//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use crane_core::calculations::crane_size::{GroundCondition, SiteAccess};
use crane_core::calculations::hire_comparison::LiftComplexity;
use crane_core::calculations::project_cost::HireType;
use crane_core::units::WeightUnit;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "crane-quote")]
#[command(version)]
#[command(about = "UK crane hire pricing: hire, transport and crane size estimates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List crane types, or show one in detail
    Cranes {
        /// Crane type id (e.g. "mobile")
        id: Option<String>,
    },

    /// List pricing regions and their multipliers
    Regions,

    /// Price a crane hire
    Hire {
        /// Crane type id (e.g. "mobile")
        crane: String,

        /// Tonnage band label (e.g. "50-80t")
        tonnage: String,

        /// Hire duration in days
        #[arg(long, short = 'd', default_value = "1")]
        days: u32,

        /// Region id. Uses config value if not specified.
        #[arg(long, short = 'r')]
        region: Option<String>,

        /// Price as a fully managed contract lift
        #[arg(long)]
        contract: bool,
    },

    /// Price transport to site
    Transport {
        /// Crane capacity in tonnes
        tonnage: f64,

        /// One-way distance in miles
        miles: f64,

        /// Quote the return trip too (true/false). Uses config value if not specified.
        #[arg(long)]
        return_trip: Option<bool>,
    },

    /// Recommend a crane size for a lift
    Size {
        /// Load weight
        load: f64,

        /// Unit of the load weight
        #[arg(long, short = 'u', value_enum, default_value_t = WeightUnitArg::Kg)]
        unit: WeightUnitArg,

        /// Lift radius in metres
        #[arg(long, short = 'r')]
        radius: f64,

        /// Lift height in metres
        #[arg(long)]
        height: f64,

        /// Ground condition at the crane position
        #[arg(long, value_enum, default_value_t = GroundArg::Hard)]
        ground: GroundArg,

        /// Access to the site
        #[arg(long, value_enum, default_value_t = AccessArg::Easy)]
        access: AccessArg,
    },

    /// Compare CPA hire with a contract lift
    Compare {
        /// Crane type id
        crane: String,

        /// Tonnage band label
        tonnage: String,

        /// Hire duration in days
        #[arg(long, short = 'd', default_value = "1")]
        days: u32,

        /// Region id. Uses config value if not specified.
        #[arg(long, short = 'r')]
        region: Option<String>,

        /// Do you have a qualified Appointed Person?
        #[arg(long)]
        appointed_person: Option<bool>,

        /// Do you hold lifting operations insurance?
        #[arg(long)]
        insurance: Option<bool>,

        /// How involved the lift is
        #[arg(long, value_enum)]
        complexity: Option<ComplexityArg>,
    },

    /// Estimate the total cost of a lifting project
    Project {
        /// Crane type id
        crane: String,

        /// Tonnage band label
        tonnage: String,

        /// Hire duration in days
        #[arg(long, short = 'd', default_value = "1")]
        days: u32,

        /// Region id. Uses config value if not specified.
        #[arg(long, short = 'r')]
        region: Option<String>,

        /// Hire arrangement
        #[arg(long, value_enum, default_value_t = HireTypeArg::Contract)]
        hire_type: HireTypeArg,

        /// One-way distance to site in miles
        #[arg(long, short = 'm', default_value = "25")]
        miles: f64,

        /// Slingers supplied (CPA only)
        #[arg(long, default_value = "1")]
        slingers: u32,

        /// Appointed Person already arranged (CPA only)
        #[arg(long)]
        no_appointed_person: bool,

        /// Road closure permit needed
        #[arg(long)]
        road_closure: bool,

        /// Airspace permit needed
        #[arg(long)]
        airspace: bool,

        /// Contingency percentage. Uses config value if not specified.
        #[arg(long)]
        contingency: Option<u32>,
    },

    /// Run calculations from a JSON file (one item or an array)
    Run {
        /// Path to JSON file
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WeightUnitArg {
    Kg,
    Tonnes,
}

impl From<WeightUnitArg> for WeightUnit {
    fn from(arg: WeightUnitArg) -> Self {
        match arg {
            WeightUnitArg::Kg => WeightUnit::Kg,
            WeightUnitArg::Tonnes => WeightUnit::Tonnes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroundArg {
    Hard,
    Soft,
}

impl From<GroundArg> for GroundCondition {
    fn from(arg: GroundArg) -> Self {
        match arg {
            GroundArg::Hard => GroundCondition::Hard,
            GroundArg::Soft => GroundCondition::Soft,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AccessArg {
    Easy,
    Restricted,
    Tight,
}

impl From<AccessArg> for SiteAccess {
    fn from(arg: AccessArg) -> Self {
        match arg {
            AccessArg::Easy => SiteAccess::Easy,
            AccessArg::Restricted => SiteAccess::Restricted,
            AccessArg::Tight => SiteAccess::Tight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ComplexityArg {
    Simple,
    Moderate,
    Complex,
}

impl From<ComplexityArg> for LiftComplexity {
    fn from(arg: ComplexityArg) -> Self {
        match arg {
            ComplexityArg::Simple => LiftComplexity::Simple,
            ComplexityArg::Moderate => LiftComplexity::Moderate,
            ComplexityArg::Complex => LiftComplexity::Complex,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HireTypeArg {
    Cpa,
    Contract,
}

impl From<HireTypeArg> for HireType {
    fn from(arg: HireTypeArg) -> Self {
        match arg {
            HireTypeArg::Cpa => HireType::Cpa,
            HireTypeArg::Contract => HireType::Contract,
        }
    }
}
