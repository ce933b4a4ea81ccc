use crate::aggregate::AggregateState;
use crate::counter::{CountItem, OrderedCounter};
use crate::ranking;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spoke {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSpoke {
    pub hub: String,
    pub spokes: Vec<Spoke>,
    /// True when no question mentioned the anchor and the global ranking was used.
    pub fallback: bool,
}

/// Destinations asked about alongside `anchor`, ranked by mention count.
///
/// Falls back to the overall top locations when no question names the anchor.
pub fn derive_hub_spoke(state: &AggregateState<'_>, anchor: &str, hub_label: &str, k: usize) -> HubSpoke {
    let needle = anchor.to_lowercase();
    let anchored: OrderedCounter = state
        .records
        .iter()
        .filter(|r| r.question_mentions(&needle))
        .filter(|r| !r.location.is_empty())
        .map(|r| r.location.as_str())
        .collect();

    let (items, fallback) = if anchored.is_empty() {
        (ranking::top_locations(state, k), true)
    } else {
        (anchored.top(k), false)
    };

    HubSpoke {
        hub: hub_label.to_string(),
        spokes: items
            .into_iter()
            .map(|CountItem { name, count }| Spoke { label: name, value: count })
            .collect(),
        fallback,
    }
}
