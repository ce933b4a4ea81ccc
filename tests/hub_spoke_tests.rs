mod common;

use common::{at, rec};
use convoscope::aggregate::aggregate;
use convoscope::hub_spoke::derive_hub_spoke;
use convoscope::ranking::top_locations;
use convoscope::ConversationRecord;

fn asked(question: &str, location: &str) -> ConversationRecord {
    let mut r = rec("2025-03-01", "10:00", "Mobility & Access", location);
    r.user_question = question.to_string();
    r
}

#[test]
fn ranks_destinations_mentioned_with_anchor() {
    let records = vec![
        asked("How do I get from AL JAFILIYA bus stop to Dubai Mall?", "Dubai Mall"),
        asked("Which bus from al jafiliya to Karama Park?", "Karama Park"),
        asked("Which bus from Al Jafiliya to Karama Park?", "Karama Park"),
        asked("Where is the nearest ATM?", "Zabeel ATM"),
        asked("Where is the nearest ATM?", "Zabeel ATM"),
        asked("Where is the nearest ATM?", "Zabeel ATM"),
    ];
    let state = aggregate(&records);
    let hs = derive_hub_spoke(&state, "Al Jafiliya", "Al Jafiliya", 10);
    assert!(!hs.fallback);
    assert_eq!(hs.hub, "Al Jafiliya");
    let spokes: Vec<(&str, usize)> = hs.spokes.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(spokes, vec![("Karama Park", 2), ("Dubai Mall", 1)]);
}

#[test]
fn falls_back_to_global_top_locations() {
    let records = vec![at("B"), at("A"), at("A"), at("C")];
    let state = aggregate(&records);
    let hs = derive_hub_spoke(&state, "Al Jafiliya", "Al Jafiliya", 10);
    assert!(hs.fallback);
    let expected: Vec<(String, usize)> = top_locations(&state, 10).into_iter().map(|i| (i.name, i.count)).collect();
    let got: Vec<(String, usize)> = hs.spokes.into_iter().map(|s| (s.label, s.value)).collect();
    assert_eq!(got, expected);
}

#[test]
fn anchored_rows_without_location_do_not_count() {
    let records = vec![asked("From Al Jafiliya, where to?", ""), at("Dubai Mall")];
    let hs = derive_hub_spoke(&aggregate(&records), "Al Jafiliya", "Al Jafiliya", 10);
    assert!(hs.fallback);
    assert_eq!(hs.spokes.len(), 2);
}

#[test]
fn anchor_and_label_are_configurable() {
    let records = vec![asked("Bus from Union Square to Deira City Centre?", "Deira City Centre")];
    let hs = derive_hub_spoke(&aggregate(&records), "union square", "Union Sq.", 10);
    assert!(!hs.fallback);
    assert_eq!(hs.hub, "Union Sq.");
    assert_eq!(hs.spokes[0].label, "Deira City Centre");
}
