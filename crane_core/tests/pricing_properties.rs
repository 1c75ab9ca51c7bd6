//! Behaviour of the public pricing API as a quoting front end sees it.

use std::collections::HashSet;

use crane_core::calculations::crane_size::{recommend_crane_size, GroundCondition, SiteAccess};
use crane_core::calculations::hire_cost::{calculate_hire_cost, hire_cost_from_rate};
use crane_core::calculations::transport_cost::calculate_transport_cost;
use crane_core::data::{get_region_multiplier, regions, TransportClass};
use crane_core::{CalculationItem, CalculationOutput, CostRange};

#[test]
fn unknown_region_prices_at_baseline() {
    assert_eq!(get_region_multiplier("atlantis"), 1.0);

    let unknown = calculate_hire_cost("mobile", "50-80t", 3, "atlantis", false).unwrap();
    let midlands = calculate_hire_cost("mobile", "50-80t", 3, "midlands", false).unwrap();
    assert_eq!(unknown.region_multiplier, 1.0);
    assert_eq!(unknown.total_for_duration, midlands.total_for_duration);
}

#[test]
fn unknown_crane_or_tonnage_is_none() {
    assert!(calculate_hire_cost("gantry", "50-80t", 3, "london", false).is_none());
    assert!(calculate_hire_cost("mobile", "50-80 t", 3, "london", false).is_none());
    assert!(calculate_hire_cost("mobile", "13-25t", 3, "london", false).is_none());
}

#[test]
fn duration_band_boundaries_at_flat_rate() {
    let flat = CostRange::new(100, 100);
    let cases = [(1, 100), (4, 400), (5, 450), (19, 1710), (20, 1600)];
    for (days, expected) in cases {
        let result = hire_cost_from_rate(flat, 1.0, days, false);
        assert_eq!(result.total_for_duration.min, expected, "{} days", days);
        assert_eq!(result.total_for_duration.max, expected, "{} days", days);
    }
}

#[test]
fn contract_lift_widens_each_bound_independently() {
    let result = hire_cost_from_rate(CostRange::new(100, 200), 1.0, 1, true);
    assert_eq!(result.contract_lift_rate, Some(CostRange::new(180, 440)));
    assert_eq!(result.total_for_duration, CostRange::new(180, 440));
}

#[test]
fn transport_class_boundaries() {
    let cases = [
        (49.9, TransportClass::Small),
        (50.0, TransportClass::Medium),
        (99.9, TransportClass::Medium),
        (100.0, TransportClass::Large),
        (199.9, TransportClass::Large),
        (200.0, TransportClass::Heavy),
    ];
    for (tonnage, class) in cases {
        let result = calculate_transport_cost(tonnage, 20.0);
        assert_eq!(result.class, class, "tonnage {}", tonnage);
        assert_eq!(result.escort_required, tonnage >= 100.0, "tonnage {}", tonnage);
    }
}

#[test]
fn radius_bands_are_strict() {
    let at_10 = recommend_crane_size(5000.0, 10.0, 10.0, GroundCondition::Hard, SiteAccess::Easy);
    let past_10 =
        recommend_crane_size(5000.0, 10.01, 10.0, GroundCondition::Hard, SiteAccess::Easy);
    let past_30 =
        recommend_crane_size(5000.0, 30.01, 10.0, GroundCondition::Hard, SiteAccess::Easy);

    assert_eq!(at_10.radius_factor, 1.0);
    assert_eq!(past_10.radius_factor, 1.2);
    assert_eq!(past_30.radius_factor, 2.0);
}

#[test]
fn soft_and_tight_list_is_capped_and_unique() {
    let scenarios = [(2000.0, 5.0), (30000.0, 12.0), (700000.0, 5.0)];
    for (load_kg, radius) in scenarios {
        let rec =
            recommend_crane_size(load_kg, radius, 10.0, GroundCondition::Soft, SiteAccess::Tight);
        let unique: HashSet<&String> = rec.crane_types.iter().collect();
        assert!(rec.crane_types.len() <= 4, "{} kg", load_kg);
        assert_eq!(unique.len(), rec.crane_types.len(), "{} kg", load_kg);
        assert!(rec.warnings.len() >= 2, "{} kg", load_kg);
    }

    // City qualifies and stays at the front
    let rec = recommend_crane_size(30000.0, 12.0, 10.0, GroundCondition::Soft, SiteAccess::Tight);
    assert_eq!(rec.crane_types, vec!["city", "mobile", "all-terrain", "crawler"]);

    // Nothing in the catalog reaches 790t, but soft ground still offers a crawler
    let rec = recommend_crane_size(700000.0, 5.0, 10.0, GroundCondition::Soft, SiteAccess::Tight);
    assert_eq!(rec.recommended_tonnage.min, 790.0);
    assert_eq!(rec.crane_types, vec!["crawler"]);
}

#[test]
fn five_tonne_lift_end_to_end() {
    let rec = recommend_crane_size(5000.0, 15.0, 10.0, GroundCondition::Hard, SiteAccess::Easy);
    assert!((rec.required_capacity - 7.5).abs() < 1e-9);
    assert_eq!(rec.recommended_tonnage.min, 10.0);
    assert_eq!(rec.recommended_tonnage.max, 10.0);
    assert_eq!(rec.crane_types, vec!["city", "mobile", "all-terrain", "crawler"]);
    assert!(rec.warnings.is_empty());
}

#[test]
fn every_region_prices_the_same_band() {
    for region in regions() {
        let result = calculate_hire_cost("city", "13-25t", 1, &region.id, false).unwrap();
        assert_eq!(result.region_multiplier, region.multiplier, "{}", region.id);
        assert!(result.total_for_duration.min <= result.total_for_duration.max);
    }
}

#[test]
fn batch_document_round_trip() {
    let json = r#"[
        { "type": "HireCost", "crane_type_id": "mobile", "tonnage_label": "50-80t",
          "duration_days": 5, "region_id": "london", "is_contract_lift": true },
        { "type": "ProjectCost", "crane_type_id": "mobile", "tonnage_label": "50-80t",
          "duration_days": 2, "region_id": "midlands", "hire_type": "cpa",
          "transport_distance_miles": 25.0, "needs_road_closure": true }
    ]"#;
    let items: Vec<CalculationItem> = serde_json::from_str(json).unwrap();

    match items[0].run().unwrap() {
        // 1105-1560 regional, contract 1989-3432, x5 x0.9
        CalculationOutput::HireCost(result) => {
            assert_eq!(result.contract_lift_rate, Some(CostRange::new(1989, 3432)));
            assert_eq!(result.total_for_duration, CostRange::new(8951, 15444));
        }
        other => panic!("unexpected output: {:?}", other),
    }

    match items[1].run().unwrap() {
        CalculationOutput::ProjectCost(result) => {
            assert_eq!(result.grand_total, CostRange::new(3487, 5786));
        }
        other => panic!("unexpected output: {:?}", other),
    }
}
