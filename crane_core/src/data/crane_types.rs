//! Crane Type Catalog
//!
//! The seven crane categories quoted on the site, each with its tonnage
//! bands and typical UK daily hire rates (GBP, crane plus operator).
//!
//! Tonnage bands are ordered ascending within each type. The band `label`
//! (e.g. `"50-80t"`) is the lookup key used by the hire cost calculator.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::units::CostRange;

/// One capacity band within a crane type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageRange {
    /// Lower capacity bound (tonnes)
    pub min: f64,
    /// Upper capacity bound (tonnes)
    pub max: f64,
    /// Display label, unique within the parent crane type
    pub label: String,
    /// Cheapest typical daily rate (GBP)
    pub daily_rate_min: i64,
    /// Most expensive typical daily rate (GBP)
    pub daily_rate_max: i64,
    /// Weekly rate floor (tower cranes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_rate_min: Option<i64>,
    /// Weekly rate ceiling (tower cranes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_rate_max: Option<i64>,
}

impl TonnageRange {
    fn new(min: f64, max: f64, label: &str, daily_rate_min: i64, daily_rate_max: i64) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            daily_rate_min,
            daily_rate_max,
            weekly_rate_min: None,
            weekly_rate_max: None,
        }
    }

    fn with_weekly(mut self, weekly_rate_min: i64, weekly_rate_max: i64) -> Self {
        self.weekly_rate_min = Some(weekly_rate_min);
        self.weekly_rate_max = Some(weekly_rate_max);
        self
    }

    /// Daily rate as a cost range
    pub fn daily_rate(&self) -> CostRange {
        CostRange::new(self.daily_rate_min, self.daily_rate_max)
    }

    /// Weekly rate as a cost range, when the band publishes one
    pub fn weekly_rate(&self) -> Option<CostRange> {
        match (self.weekly_rate_min, self.weekly_rate_max) {
            (Some(min), Some(max)) => Some(CostRange::new(min, max)),
            _ => None,
        }
    }

    /// Capacity midpoint, used to size transport for a hired band
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A category of crane (mobile, crawler, tower, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraneType {
    /// Stable identifier, e.g. `"all-terrain"`
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub description: String,
    /// Capacity bands, ascending
    pub tonnage_ranges: Vec<TonnageRange>,
    pub best_for: Vec<String>,
    pub considerations: Vec<String>,
}

impl CraneType {
    /// Largest capacity offered by any band
    pub fn max_tonnage(&self) -> f64 {
        self.tonnage_ranges
            .iter()
            .map(|r| r.max)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest capacity offered by any band
    pub fn min_tonnage(&self) -> f64 {
        self.tonnage_ranges
            .iter()
            .map(|r| r.min)
            .fold(f64::INFINITY, f64::min)
    }

    /// Find a band by its exact label
    pub fn find_tonnage(&self, label: &str) -> Option<&TonnageRange> {
        self.tonnage_ranges.iter().find(|r| r.label == label)
    }

    /// Band labels in catalog order
    pub fn tonnage_labels(&self) -> impl Iterator<Item = &str> {
        self.tonnage_ranges.iter().map(|r| r.label.as_str())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static CRANE_TYPES: Lazy<Vec<CraneType>> = Lazy::new(|| {
    vec![
        CraneType {
            id: "city".to_string(),
            name: "City Crane".to_string(),
            short_name: "City".to_string(),
            description: "Compact mobile cranes ideal for urban sites with restricted access"
                .to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(13.0, 25.0, "13-25t", 400, 500),
                TonnageRange::new(25.0, 50.0, "25-50t", 500, 650),
            ],
            best_for: strings(&[
                "Urban construction sites",
                "Tight access locations",
                "Residential projects",
                "Quick setup jobs",
            ]),
            considerations: strings(&[
                "Limited lifting capacity",
                "Shorter reach than larger cranes",
            ]),
        },
        CraneType {
            id: "mobile".to_string(),
            name: "Mobile Crane".to_string(),
            short_name: "Mobile".to_string(),
            description: "Versatile wheeled cranes that can travel on roads between sites"
                .to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(20.0, 35.0, "20-35t", 550, 750),
                TonnageRange::new(35.0, 50.0, "35-50t", 700, 900),
                TonnageRange::new(50.0, 80.0, "50-80t", 850, 1200),
                TonnageRange::new(80.0, 100.0, "80-100t", 1100, 1500),
            ],
            best_for: strings(&[
                "General construction",
                "Industrial lifts",
                "Infrastructure projects",
                "Multiple site visits",
            ]),
            considerations: strings(&[
                "Requires firm ground",
                "Outriggers need space",
                "Road travel possible",
            ]),
        },
        CraneType {
            id: "all-terrain".to_string(),
            name: "All-Terrain Crane".to_string(),
            short_name: "All-Terrain".to_string(),
            description: "Heavy-duty cranes with all-wheel drive for challenging ground conditions"
                .to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(35.0, 60.0, "35-60t", 800, 1100),
                TonnageRange::new(60.0, 100.0, "60-100t", 1000, 1500),
                TonnageRange::new(100.0, 160.0, "100-160t", 1400, 2000),
                TonnageRange::new(160.0, 220.0, "160-220t", 1800, 2500),
            ],
            best_for: strings(&[
                "Rough terrain sites",
                "Windfarm installations",
                "Heavy industrial lifts",
                "Remote locations",
            ]),
            considerations: strings(&[
                "Higher transport costs",
                "May need escort vehicles",
                "Premium pricing",
            ]),
        },
        CraneType {
            id: "crawler".to_string(),
            name: "Crawler Crane".to_string(),
            short_name: "Crawler".to_string(),
            description: "Track-mounted cranes for heavy lifts on soft or uneven ground"
                .to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(50.0, 100.0, "50-100t", 1000, 1500),
                TonnageRange::new(100.0, 200.0, "100-200t", 1400, 2200),
                TonnageRange::new(200.0, 400.0, "200-400t", 2000, 3500),
                TonnageRange::new(400.0, 750.0, "400-750t", 3500, 6000),
            ],
            best_for: strings(&[
                "Soft ground conditions",
                "Long-term projects",
                "Very heavy lifts",
                "Power station work",
            ]),
            considerations: strings(&[
                "Cannot travel on roads",
                "Requires transport to site",
                "Longer setup time",
            ]),
        },
        CraneType {
            id: "tower".to_string(),
            name: "Tower Crane".to_string(),
            short_name: "Tower".to_string(),
            description: "Fixed cranes for long-term construction projects with high lifting needs"
                .to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(4.0, 8.0, "4-8t", 350, 500).with_weekly(2000, 2800),
                TonnageRange::new(8.0, 12.0, "8-12t", 450, 650).with_weekly(2500, 3500),
                TonnageRange::new(12.0, 20.0, "12-20t", 550, 800).with_weekly(3000, 4500),
            ],
            best_for: strings(&[
                "High-rise construction",
                "Long-term projects",
                "Repetitive lifting",
                "City centre sites",
            ]),
            considerations: strings(&[
                "Installation required",
                "Minimum hire periods",
                "Planning permissions may apply",
            ]),
        },
        CraneType {
            id: "hiab".to_string(),
            name: "HIAB / Truck-Mounted".to_string(),
            short_name: "HIAB".to_string(),
            description: "Lorry-mounted cranes for delivery and unloading operations".to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(3.0, 10.0, "3-10t", 280, 400),
                TonnageRange::new(10.0, 20.0, "10-20t", 380, 550),
                TonnageRange::new(20.0, 35.0, "20-35t", 500, 700),
            ],
            best_for: strings(&[
                "Material deliveries",
                "Machinery placement",
                "Quick lifts",
                "Haulage with lifting",
            ]),
            considerations: strings(&[
                "Limited reach",
                "Combined with transport",
                "Self-drive options available",
            ]),
        },
        CraneType {
            id: "spider".to_string(),
            name: "Spider Crane".to_string(),
            short_name: "Spider".to_string(),
            description: "Compact tracked cranes for indoor and restricted access work".to_string(),
            tonnage_ranges: vec![
                TonnageRange::new(1.0, 3.0, "1-3t", 350, 500),
                TonnageRange::new(3.0, 6.0, "3-6t", 450, 650),
                TonnageRange::new(6.0, 10.0, "6-10t", 600, 850),
            ],
            best_for: strings(&[
                "Indoor work",
                "Glass installation",
                "Atriums",
                "Restricted access",
            ]),
            considerations: strings(&["Limited capacity", "Specialist operator often required"]),
        },
    ]
});

/// All crane types in catalog order
pub fn crane_types() -> &'static [CraneType] {
    &CRANE_TYPES
}

/// Look up a crane type by id
pub fn get_crane_by_id(id: &str) -> Option<&'static CraneType> {
    CRANE_TYPES.iter().find(|crane| crane.id == id)
}

/// Tonnage bands for a crane type; empty for an unknown id
pub fn get_tonnage_options(crane_id: &str) -> &'static [TonnageRange] {
    get_crane_by_id(crane_id)
        .map(|crane| crane.tonnage_ranges.as_slice())
        .unwrap_or(&[])
}
