use crate::aggregate::AggregateState;
use crate::categories::{
    self, CATEGORY_LABELS, ENTERTAINMENT_LEISURE_STAY, FOOD_BEVERAGES, RELIGIOUS_SERVICES,
    RETAIL_LIFESTYLE, SERVICES_UTILITIES,
};
use crate::counter::OrderedCounter;
use crate::ranking::{percent_of, LocationRow};
use serde::{Deserialize, Serialize};

pub const LATE_NIGHT_HOURS: [usize; 5] = [22, 23, 0, 1, 2];
pub const DINNER_HOURS: [usize; 3] = [19, 20, 21];
pub const MORNING_HOURS: [usize; 6] = [6, 7, 8, 9, 10, 11];
pub const AFTERNOON_HOURS: [usize; 6] = [12, 13, 14, 15, 16, 17];
pub const EVENING_HOURS: [usize; 6] = [18, 19, 20, 21, 22, 23];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSegments {
    pub food_seekers: u32,
    pub worshippers: u32,
    pub shoppers: u32,
    pub tourists: u32,
    pub late_night_users: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayPersona {
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionPotential {
    pub location: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceIntelligence {
    pub intent_statement: String,
    pub dinner_food_percent: u32,
    pub intent_segments: IntentSegments,
    pub time_of_day_persona: TimeOfDayPersona,
    pub conversion_potential: Vec<ConversionPotential>,
}

pub fn intent_segments(state: &AggregateState<'_>) -> IntentSegments {
    let total = state.total();
    let worship = state
        .records
        .iter()
        .filter(|r| r.sub_category.to_lowercase() == RELIGIOUS_SERVICES || r.category == SERVICES_UTILITIES)
        .count();
    IntentSegments {
        food_seekers: percent_of(state.by_category.get(FOOD_BEVERAGES), total),
        worshippers: percent_of(worship, total),
        shoppers: percent_of(state.by_category.get(RETAIL_LIFESTYLE), total),
        tourists: percent_of(state.by_category.get(ENTERTAINMENT_LEISURE_STAY), total),
        late_night_users: percent_of(state.count_in_hours(&LATE_NIGHT_HOURS), total),
    }
}

/// Share of dinner-window records (19:00-21:59) that are food queries.
///
/// The denominator is the dinner window itself, not the overall total.
pub fn dinner_food_percent(state: &AggregateState<'_>) -> u32 {
    let dinner = state.rows_in_hours(&DINNER_HOURS);
    let food = dinner.iter().filter(|r| r.category == FOOD_BEVERAGES).count();
    percent_of(food, dinner.len())
}

/// Dominant canonical category among records in `hours`.
///
/// Labels are compared in canonical order with a strict `>`, so an empty
/// window resolves to the first label.
pub fn top_category_for_hours(state: &AggregateState<'_>, hours: &[usize]) -> &'static str {
    let window: OrderedCounter = state
        .rows_in_hours(hours)
        .into_iter()
        .map(|r| r.category.as_str())
        .filter(|c| categories::is_canonical(c))
        .collect();
    let mut top = CATEGORY_LABELS[0];
    let mut top_count: Option<usize> = None;
    for label in CATEGORY_LABELS {
        let n = window.get(label);
        if top_count.map_or(true, |best| n > best) {
            top = label;
            top_count = Some(n);
        }
    }
    top
}

pub fn time_of_day_persona(state: &AggregateState<'_>) -> TimeOfDayPersona {
    let line = |part: &str, hours: &[usize]| {
        format!("{part}: {}.", categories::persona_for(top_category_for_hours(state, hours)))
    };
    TimeOfDayPersona {
        morning: line("Morning", &MORNING_HOURS[..]),
        afternoon: line("Afternoon", &AFTERNOON_HOURS[..]),
        evening: line("Evening", &EVENING_HOURS[..]),
    }
}

pub fn conversion_potential(location_rows: &[LocationRow], k: usize) -> Vec<ConversionPotential> {
    location_rows
        .iter()
        .take(k)
        .map(|row| ConversionPotential {
            location: row.location.clone(),
            statement: format!(
                "{} appears in top queries -> {}.",
                row.location,
                categories::sponsorship_label_for(&row.category)
            ),
        })
        .collect()
}

pub fn audience_intelligence(
    state: &AggregateState<'_>,
    location_rows: &[LocationRow],
    conversion_top: usize,
) -> AudienceIntelligence {
    let dinner = dinner_food_percent(state);
    AudienceIntelligence {
        intent_statement: format!("{dinner}% of users between 7-9pm are looking for food nearby."),
        dinner_food_percent: dinner,
        intent_segments: intent_segments(state),
        time_of_day_persona: time_of_day_persona(state),
        conversion_potential: conversion_potential(location_rows, conversion_top),
    }
}
