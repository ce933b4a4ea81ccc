mod common;

use common::rec;
use convoscope::snapshot::{last_updated, metric_cards, recent_conversations};
use convoscope::{build_snapshot, ConversationRecord, CoordinateReference, DashboardOpts};

#[test]
fn empty_input_builds_a_zeroed_snapshot() {
    let s = build_snapshot(&[], &CoordinateReference::new(), &DashboardOpts::default());
    assert_eq!(s.total_conversations, 0);
    let values: Vec<&str> = s.metrics.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, vec!["0", "0%", "0", "0%"]);
    assert_eq!(s.peak_hours.labels.len(), 24);
    assert_eq!(s.peak_hours.labels[0], "00:00");
    assert_eq!(s.peak_hours.labels[23], "23:00");
    assert!(s.peak_hours.data.iter().all(|c| *c == 0));
    assert!(s.category_hourly.restaurants.iter().all(|c| *c == 0));
    assert_eq!(s.place_type_breakdown.data, vec![0; 6]);
    assert!(s.daily_traffic.labels.is_empty());
    assert!(s.location_rows.is_empty());
    assert!(s.bus_route_rows.is_empty());
    assert!(s.heatmap_points.is_empty());
    assert!(s.hub_spoke.fallback);
    assert!(s.hub_spoke.spokes.is_empty());
    assert_eq!(s.hub_spoke.hub, "Al Jafiliya");
    assert_eq!(s.audience_intelligence.dinner_food_percent, 0);
    assert_eq!(s.audience_intelligence.intent_segments.food_seekers, 0);
    assert!(s.audience_intelligence.conversion_potential.is_empty());
    assert_eq!(s.last_updated, "Unknown");
    assert!(s.conversations.is_empty());
}

#[test]
fn metric_cards_report_rates() {
    let mut records = vec![
        rec("2025-03-01", "08:00", "x", "A"),
        rec("2025-03-01", "08:00", "x", "B"),
        rec("2025-03-01", "08:00", "x", "B"),
        rec("2025-03-01", "08:00", "x", ""),
    ];
    records[0].assistant_answer = "Take bus 8".into();
    records[1].assistant_answer = "   ".into();
    records[2].assistant_answer = "Walk".into();
    records[0].csat = "HAPPY".into();
    records[1].csat = "happy ".into();
    let cards = metric_cards(&records);
    assert_eq!(cards[0].label, "Total Conversations");
    assert_eq!(cards[0].value, "4");
    assert_eq!(cards[1].value, "50%");
    assert_eq!(cards[1].delta, "2 answered");
    assert_eq!(cards[2].value, "3");
    assert_eq!(cards[3].value, "25%");
    assert_eq!(cards[3].delta_class.as_deref(), Some("info"));
    assert_eq!(cards[0].delta_class, None);
}

#[test]
fn last_updated_takes_latest_key_and_skips_blank_rows() {
    let records = vec![
        rec("2025-03-04", "23:10", "x", "A"),
        rec("2025-03-05", "", "x", "A"),
        rec("", "", "x", "A"),
        rec("2025-03-05", "", "x", "A"),
    ];
    assert_eq!(last_updated(&records), "2025-03-05 00:00:00");
    assert_eq!(last_updated(&[rec("", "", "x", "A")]), "Unknown");
}

#[test]
fn conversations_are_newest_first_and_capped() {
    let records: Vec<ConversationRecord> = (0..60)
        .map(|i| rec(&format!("2025-03-{:02}", 1 + i % 28), &format!("{:02}:00", i % 24), "x", &format!("L{i}")))
        .collect();
    let recent = recent_conversations(&records, 50);
    assert_eq!(recent.len(), 50);
    for pair in recent.windows(2) {
        assert!(pair[0].timeline_key() >= pair[1].timeline_key());
    }
    assert_eq!(recent[0].date, "2025-03-28");
}

#[test]
fn equal_keys_keep_input_order() {
    let records = vec![rec("2025-03-01", "08:00", "x", "first"), rec("2025-03-01", "08:00", "x", "second")];
    let recent = recent_conversations(&records, 50);
    assert_eq!(recent[0].location, "first");
    assert_eq!(recent[1].location, "second");
}

#[test]
fn full_snapshot_wires_every_section() {
    let mut records = vec![
        rec("2025-03-02", "19:30", "Food & Beverages", "Al Mallah"),
        rec("2025-03-01", "08:05", "Mobility & Access", "BurJuman"),
        rec("2025-03-02", "20:10", "Food & Beverages", "Al Mallah"),
    ];
    records[0].user_question = "From Al Jafiliya to Al Mallah?".into();
    records[0].assistant_answer = "Take bus 8 and 12.".into();
    records[1].assistant_answer = "The 27 bus is best.".into();
    records[2].latency_ms = Some(900.0);

    let reference = CoordinateReference::from_json_str(
        r#"{"restaurants": [{"name": "Al Mallah", "latitude": 25.23, "longitude": 55.28}]}"#,
    )
    .unwrap();
    let opts = DashboardOpts { top_n: 5, ..Default::default() };
    let s = build_snapshot(&records, &reference, &opts);

    assert_eq!(s.total_conversations, 3);
    assert_eq!(s.daily_traffic.labels, vec!["2025-03-01", "2025-03-02"]);
    assert_eq!(s.daily_traffic.data, vec![1, 2]);
    assert_eq!(s.peak_hours.data[19], 1);
    assert_eq!(s.category_hourly.restaurants[20], 1);
    assert_eq!(s.location_rows[0].location, "Al Mallah");
    assert_eq!(s.location_rows[0].latency, "450 ms");
    let routes: Vec<&str> = s.bus_route_rows.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(routes, vec!["8", "12", "27"]);
    assert!(!s.hub_spoke.fallback);
    assert_eq!(s.hub_spoke.spokes[0].label, "Al Mallah");
    assert_eq!(s.heatmap_points.len(), 1);
    assert_eq!(s.heatmap_points[0].weight, 2);
    assert_eq!(s.audience_intelligence.dinner_food_percent, 100);
    assert_eq!(s.last_updated, "2025-03-02 20:10");
    assert_eq!(s.conversations[0].time, "20:10");

    let json = serde_json::to_value(&s).unwrap();
    for key in ["metrics", "peak_hours", "category_hourly", "hub_spoke", "audience_intelligence", "conversations"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}
