use crate::aggregate::{self, AggregateState, HOURS};
use crate::audience::{self, AudienceIntelligence};
use crate::config::DashboardOpts;
use crate::geocode::{self, CoordinateReference, HeatmapPoint};
use crate::hub_spoke::{self, HubSpoke};
use crate::ranking::{self, format_count, percent_of, LocationRow, RouteRow, Series};
use crate::record::{ConversationRecord, EMPTY_TIMELINE_KEY};
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHourly {
    pub labels: Vec<String>,
    pub service_utilities: Vec<usize>,
    pub restaurants: Vec<usize>,
}

/// Everything the dashboard renders, recomputed from scratch on each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: Vec<MetricCard>,
    pub peak_hours: Series,
    pub category_hourly: CategoryHourly,
    pub daily_traffic: Series,
    pub place_type_breakdown: Series,
    pub location_rows: Vec<LocationRow>,
    pub bus_route_rows: Vec<RouteRow>,
    pub audience_intelligence: AudienceIntelligence,
    pub heatmap_points: Vec<HeatmapPoint>,
    pub hub_spoke: HubSpoke,
    pub last_updated: String,
    pub total_conversations: usize,
    pub conversations: Vec<ConversationRecord>,
}

pub fn build_snapshot(
    records: &[ConversationRecord],
    reference: &CoordinateReference,
    opts: &DashboardOpts,
) -> DashboardSnapshot {
    let state = aggregate::aggregate(records);
    let location_rows = ranking::location_rows(&state, opts.top_n);
    let peak_hours = peak_hours(&state);

    let snapshot = DashboardSnapshot {
        metrics: metric_cards(records),
        category_hourly: CategoryHourly {
            labels: peak_hours.labels.clone(),
            service_utilities: state.services_by_hour.to_vec(),
            restaurants: state.food_by_hour.to_vec(),
        },
        peak_hours,
        daily_traffic: daily_traffic(&state),
        place_type_breakdown: ranking::category_breakdown(&state),
        bus_route_rows: ranking::route_rows(&state, opts.top_n),
        audience_intelligence: audience::audience_intelligence(&state, &location_rows, opts.conversion_top),
        heatmap_points: geocode::heatmap_points(&state, reference),
        hub_spoke: hub_spoke::derive_hub_spoke(&state, &opts.anchor_landmark, opts.hub_label(), opts.top_n),
        location_rows,
        last_updated: last_updated(records),
        total_conversations: records.len(),
        conversations: recent_conversations(records, opts.conversation_cap),
    };
    info!(
        total = snapshot.total_conversations,
        locations = state.by_location.len(),
        routes = state.by_route.len(),
        points = snapshot.heatmap_points.len(),
        "built dashboard snapshot"
    );
    snapshot
}

pub fn metric_cards(records: &[ConversationRecord]) -> Vec<MetricCard> {
    let total = records.len();
    let answered = records.iter().filter(|r| r.has_answer()).count();
    let unique_locations = records.iter().map(|r| r.location.as_str()).collect::<AHashSet<_>>().len();
    let happy = records.iter().filter(|r| r.is_happy()).count();

    let card = |label: &str, value: String, delta: String| MetricCard {
        label: label.to_string(),
        value,
        delta,
        delta_class: None,
    };
    vec![
        card("Total Conversations", format_count(total), "Last 30d".to_string()),
        card(
            "Answer Rate",
            format!("{}%", percent_of(answered, total)),
            format!("{} answered", format_count(answered)),
        ),
        card("Unique Locations", format_count(unique_locations), "Active destinations".to_string()),
        MetricCard {
            delta_class: Some("info".to_string()),
            ..card("Customer Satisfaction", format!("{}%", percent_of(happy, total)), "Happy Users".to_string())
        },
    ]
}

pub fn hour_labels() -> Vec<String> {
    (0..HOURS).map(|h| format!("{h:02}:00")).collect()
}

fn peak_hours(state: &AggregateState<'_>) -> Series {
    Series { labels: hour_labels(), data: state.by_hour.to_vec() }
}

fn daily_traffic(state: &AggregateState<'_>) -> Series {
    let (labels, data) = state
        .by_date
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(d, c)| (d.to_string(), c))
        .unzip();
    Series { labels, data }
}

/// Latest `date time` seen, or "Unknown" when no record carries either.
pub fn last_updated(records: &[ConversationRecord]) -> String {
    records
        .iter()
        .map(ConversationRecord::timeline_key)
        .filter(|k| k != EMPTY_TIMELINE_KEY)
        .max()
        .map(|k| k.replacen('T', " ", 1))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Newest-first records, capped at `cap`; equal keys keep input order.
pub fn recent_conversations(records: &[ConversationRecord], cap: usize) -> Vec<ConversationRecord> {
    records
        .iter()
        .map(|r| (r.timeline_key(), r))
        .sorted_by(|a, b| b.0.cmp(&a.0))
        .take(cap)
        .map(|(_, r)| r.clone())
        .collect()
}
