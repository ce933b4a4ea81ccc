use crate::categories::{FOOD_BEVERAGES, SERVICES_UTILITIES};
use crate::counter::OrderedCounter;
use crate::record::ConversationRecord;
use crate::routes;
use ahash::AHashMap;

pub const HOURS: usize = 24;

/// Every bucket the dashboard needs, filled in one pass over the records.
#[derive(Debug, Clone)]
pub struct AggregateState<'a> {
    pub records: &'a [ConversationRecord],
    pub by_date: OrderedCounter,
    pub by_hour: [usize; HOURS],
    pub services_by_hour: [usize; HOURS],
    pub food_by_hour: [usize; HOURS],
    pub by_category: OrderedCounter,
    pub by_location: OrderedCounter,
    pub location_categories: AHashMap<String, OrderedCounter>,
    pub location_latency_ms: AHashMap<String, f64>,
    pub by_route: OrderedCounter,
    pub rows_by_hour: [Vec<&'a ConversationRecord>; HOURS],
}

impl<'a> AggregateState<'a> {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Records whose hour falls in any of `hours`, grouped in the order given.
    pub fn rows_in_hours(&self, hours: &[usize]) -> Vec<&'a ConversationRecord> {
        hours
            .iter()
            .filter(|h| **h < HOURS)
            .flat_map(|h| self.rows_by_hour[*h].iter().copied())
            .collect()
    }

    pub fn count_in_hours(&self, hours: &[usize]) -> usize {
        hours.iter().filter(|h| **h < HOURS).map(|h| self.rows_by_hour[*h].len()).sum()
    }

    /// Dominant category at `location`, earliest-seen on ties.
    pub fn dominant_category(&self, location: &str) -> Option<&str> {
        self.location_categories.get(location).and_then(|c| c.leader()).map(|(k, _)| k)
    }

    /// Mean latency at `location`; records without latency count as zero.
    pub fn mean_latency_ms(&self, location: &str) -> u64 {
        let count = self.by_location.get(location);
        let sum = self.location_latency_ms.get(location).copied().unwrap_or(0.0);
        (sum / count.max(1) as f64).round() as u64
    }
}

pub fn aggregate(records: &[ConversationRecord]) -> AggregateState<'_> {
    let mut state = AggregateState {
        records,
        by_date: OrderedCounter::new(),
        by_hour: [0; HOURS],
        services_by_hour: [0; HOURS],
        food_by_hour: [0; HOURS],
        by_category: OrderedCounter::new(),
        by_location: OrderedCounter::new(),
        location_categories: AHashMap::new(),
        location_latency_ms: AHashMap::new(),
        by_route: OrderedCounter::new(),
        rows_by_hour: std::array::from_fn(|_| Vec::new()),
    };

    for rec in records {
        state.by_date.increment(&rec.date);

        if let Some(hour) = rec.hour() {
            state.by_hour[hour] += 1;
            state.rows_by_hour[hour].push(rec);
            if rec.category == SERVICES_UTILITIES {
                state.services_by_hour[hour] += 1;
            }
            if rec.category == FOOD_BEVERAGES {
                state.food_by_hour[hour] += 1;
            }
        }

        state.by_category.increment(&rec.category);
        state.by_location.increment(&rec.location);
        state
            .location_categories
            .entry(rec.location.clone())
            .or_default()
            .increment(&rec.category);
        *state.location_latency_ms.entry(rec.location.clone()).or_insert(0.0) += rec.latency_or_zero();

        for route in routes::extract_routes(&rec.assistant_answer) {
            state.by_route.increment(&route);
        }
    }

    state
}
