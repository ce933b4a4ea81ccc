mod common;

use common::at;
use convoscope::aggregate::aggregate;
use convoscope::geocode::{heatmap_points, Coordinate, CoordinateReference};
use convoscope::loader::LoadError;

const KB: &str = r#"{
  "restaurants": [
    {"name": "Al Mallah", "latitude": 25.2345, "longitude": 55.2811, "cuisine": "Lebanese"},
    {"name": "No Coords", "latitude": "n/a", "longitude": 55.0},
    {"latitude": 1.0, "longitude": 2.0}
  ],
  "meta": {"version": 3},
  "malls": [
    {"name": "Al Mallah", "latitude": 0.0, "longitude": 0.0},
    {"name": "BurJuman", "latitude": 25, "longitude": 55}
  ]
}"#;

#[test]
fn first_occurrence_wins_and_incomplete_entries_are_skipped() {
    let reference = CoordinateReference::from_json_str(KB).unwrap();
    assert_eq!(reference.len(), 2);
    assert_eq!(reference.get("Al Mallah"), Some(Coordinate { latitude: 25.2345, longitude: 55.2811 }));
    assert_eq!(reference.get("BurJuman"), Some(Coordinate { latitude: 25.0, longitude: 55.0 }));
    assert_eq!(reference.get("No Coords"), None);
}

#[test]
fn non_object_root_is_rejected() {
    assert!(matches!(CoordinateReference::from_json_str("[1, 2]"), Err(LoadError::InvalidReference)));
    assert!(matches!(CoordinateReference::from_json_str("{oops"), Err(LoadError::Json(_))));
}

#[test]
fn heatmap_drops_unknown_locations() {
    let reference = CoordinateReference::from_json_str(KB).unwrap();
    let records = vec![at("Al Mallah"), at("Al Mallah"), at("Nowhere"), at("BurJuman")];
    let state = aggregate(&records);
    let points = heatmap_points(&state, &reference);
    assert_eq!(points.len(), 2);
    assert!(points.len() <= state.by_location.len());
    assert_eq!(points[0].weight, 2);
    assert_eq!(points[0].latitude, 25.2345);
    assert_eq!(points[1].weight, 1);
}

#[test]
fn empty_reference_yields_no_points() {
    let records = vec![at("Al Mallah")];
    assert!(heatmap_points(&aggregate(&records), &CoordinateReference::new()).is_empty());
}
