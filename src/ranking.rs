use crate::aggregate::AggregateState;
use crate::categories::CATEGORY_LABELS;
use crate::counter::CountItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRow {
    pub location: String,
    pub category: String,       // dominant category, "-" when unknown
    pub count: usize,
    pub volume: String,
    pub avg_latency_ms: u64,
    pub latency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRow {
    pub route: String,
    pub count: usize,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

pub fn top_locations(state: &AggregateState<'_>, k: usize) -> Vec<CountItem> {
    state.by_location.top(k)
}

/// Top `k` locations with their dominant category and mean latency.
///
/// Latency averages over every record at the location, so records without a
/// latency pull the mean towards zero.
pub fn location_rows(state: &AggregateState<'_>, k: usize) -> Vec<LocationRow> {
    top_locations(state, k)
        .into_iter()
        .map(|CountItem { name, count }| {
            let category = match state.dominant_category(&name) {
                Some(c) if !c.is_empty() => c.to_string(),
                _ => "-".to_string(),
            };
            let avg_latency_ms = state.mean_latency_ms(&name);
            LocationRow {
                location: name,
                category,
                count,
                volume: format_count(count),
                avg_latency_ms,
                latency: format!("{avg_latency_ms} ms"),
            }
        })
        .collect()
}

pub fn route_rows(state: &AggregateState<'_>, k: usize) -> Vec<RouteRow> {
    state
        .by_route
        .top(k)
        .into_iter()
        .map(|CountItem { name, count }| RouteRow { route: name, count, volume: format_count(count) })
        .collect()
}

/// Counts for the six canonical categories in display order, zero-filled.
pub fn category_breakdown(state: &AggregateState<'_>) -> Series {
    Series {
        labels: CATEGORY_LABELS.iter().map(|l| l.to_string()).collect(),
        data: CATEGORY_LABELS.iter().map(|l| state.by_category.get(l)).collect(),
    }
}

/// en-US style thousands grouping: 1234567 -> "1,234,567".
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `round(100 * part / max(whole, 1))`
pub fn percent_of(part: usize, whole: usize) -> u32 {
    ((part as f64 / whole.max(1) as f64) * 100.0).round() as u32
}
