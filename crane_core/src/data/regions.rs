//! UK Region Catalog
//!
//! Eleven pricing regions with a multiplier against the Midlands baseline
//! (`1.0`). London carries the largest premium, the North East the largest
//! discount.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Multiplier applied when a region id is not recognised
pub const BASELINE_MULTIPLIER: f64 = 1.0;

/// A UK pricing region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub short_name: String,
    /// Price multiplier relative to the Midlands baseline
    pub multiplier: f64,
    pub description: String,
    pub major_cities: Vec<String>,
}

fn region(
    id: &str,
    name: &str,
    short_name: &str,
    multiplier: f64,
    description: &str,
    cities: &[&str],
) -> Region {
    Region {
        id: id.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        multiplier,
        description: description.to_string(),
        major_cities: cities.iter().map(|c| c.to_string()).collect(),
    }
}

static REGIONS: Lazy<Vec<Region>> = Lazy::new(|| {
    vec![
        region(
            "london",
            "Greater London",
            "London",
            1.30,
            "Premium pricing due to congestion, access restrictions, and demand",
            &["Central London", "City of London", "Canary Wharf", "Stratford"],
        ),
        region(
            "south-east",
            "South East England",
            "South East",
            1.15,
            "Above average due to proximity to London and high demand",
            &["Brighton", "Reading", "Oxford", "Southampton", "Guildford"],
        ),
        region(
            "south-west",
            "South West England",
            "South West",
            1.05,
            "Slightly above baseline, tourist areas can be higher",
            &["Bristol", "Plymouth", "Exeter", "Bath", "Bournemouth"],
        ),
        region(
            "east",
            "East of England",
            "East",
            1.08,
            "Moderately above baseline, Cambridge premium",
            &["Cambridge", "Norwich", "Ipswich", "Peterborough", "Colchester"],
        ),
        region(
            "midlands",
            "Midlands",
            "Midlands",
            1.00,
            "Baseline pricing - good availability and competition",
            &["Birmingham", "Nottingham", "Leicester", "Coventry", "Derby"],
        ),
        region(
            "north-west",
            "North West England",
            "North West",
            0.95,
            "Slightly below baseline, competitive market",
            &["Manchester", "Liverpool", "Preston", "Chester", "Warrington"],
        ),
        region(
            "yorkshire",
            "Yorkshire & Humber",
            "Yorkshire",
            0.95,
            "Competitive pricing, good crane availability",
            &["Leeds", "Sheffield", "York", "Bradford", "Hull"],
        ),
        region(
            "north-east",
            "North East England",
            "North East",
            0.90,
            "Below average pricing, industrial heritage",
            &["Newcastle", "Sunderland", "Middlesbrough", "Durham", "Darlington"],
        ),
        region(
            "scotland",
            "Scotland",
            "Scotland",
            0.95,
            "Competitive, may vary for remote locations",
            &["Glasgow", "Edinburgh", "Aberdeen", "Dundee", "Inverness"],
        ),
        region(
            "wales",
            "Wales",
            "Wales",
            0.95,
            "Competitive pricing, Cardiff slightly higher",
            &["Cardiff", "Swansea", "Newport", "Wrexham", "Bangor"],
        ),
        region(
            "northern-ireland",
            "Northern Ireland",
            "N. Ireland",
            0.92,
            "Lower pricing, separate market dynamics",
            &["Belfast", "Derry", "Lisburn", "Newry", "Bangor"],
        ),
    ]
});

/// All regions in catalog order
pub fn regions() -> &'static [Region] {
    &REGIONS
}

/// Look up a region by id
pub fn get_region_by_id(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.id == id)
}

/// Price multiplier for a region.
///
/// Never fails: an unknown id prices at [`BASELINE_MULTIPLIER`].
pub fn get_region_multiplier(region_id: &str) -> f64 {
    match get_region_by_id(region_id) {
        Some(region) => region.multiplier,
        None => {
            tracing::debug!(region_id, "unknown region, using baseline multiplier");
            BASELINE_MULTIPLIER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_regions() {
        assert_eq!(regions().len(), 11);
        for region in regions() {
            assert!(region.multiplier > 0.0);
            assert!(!region.major_cities.is_empty());
        }
    }

    #[test]
    fn test_known_multipliers() {
        assert_eq!(get_region_multiplier("london"), 1.30);
        assert_eq!(get_region_multiplier("midlands"), 1.0);
        assert_eq!(get_region_multiplier("north-east"), 0.90);
        assert_eq!(get_region_multiplier("northern-ireland"), 0.92);
    }

    #[test]
    fn test_unknown_region_defaults_to_baseline() {
        assert_eq!(get_region_multiplier("unknown-id"), 1.0);
        assert_eq!(get_region_multiplier(""), 1.0);
        assert!(get_region_by_id("unknown-id").is_none());
    }

    #[test]
    fn test_get_region_by_id() {
        let region = get_region_by_id("yorkshire").unwrap();
        assert_eq!(region.name, "Yorkshire & Humber");
        assert!(region.major_cities.iter().any(|c| c == "Leeds"));
    }
}
