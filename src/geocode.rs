use crate::aggregate::AggregateState;
use crate::loader::LoadError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub weight: usize,
}

/// Location name -> coordinate table, read once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct CoordinateReference {
    by_name: AHashMap<String, Coordinate>,
}

impl CoordinateReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self, LoadError> {
        let v: Value = serde_json::from_str(s)?;
        Self::from_value(&v)
    }

    /// Builds the table from `{ "<group>": [ {name, latitude, longitude, ..}, .. ], .. }`.
    ///
    /// Groups that are not arrays and entries without a name or numeric
    /// coordinates are skipped. The first entry seen for a name wins.
    pub fn from_value(v: &Value) -> Result<Self, LoadError> {
        let groups = v.as_object().ok_or(LoadError::InvalidReference)?;
        let mut reference = Self::new();
        for entries in groups.values() {
            let Some(entries) = entries.as_array() else { continue };
            for entry in entries {
                let name = entry.get("name").and_then(Value::as_str).filter(|n| !n.is_empty());
                let lat = entry.get("latitude").and_then(Value::as_f64);
                let lng = entry.get("longitude").and_then(Value::as_f64);
                if let (Some(name), Some(latitude), Some(longitude)) = (name, lat, lng) {
                    reference.insert(name, Coordinate { latitude, longitude });
                }
            }
        }
        Ok(reference)
    }

    /// Adds `name` unless it is already present.
    pub fn insert(&mut self, name: &str, coord: Coordinate) -> bool {
        if self.by_name.contains_key(name) {
            return false;
        }
        self.by_name.insert(name.to_string(), coord);
        true
    }

    pub fn get(&self, name: &str) -> Option<Coordinate> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Weighted points for every counted location found in `reference`.
/// Unknown locations are dropped.
pub fn heatmap_points(state: &AggregateState<'_>, reference: &CoordinateReference) -> Vec<HeatmapPoint> {
    state
        .by_location
        .iter()
        .filter(|(_, count)| *count > 0)
        .filter_map(|(name, count)| {
            reference.get(name).map(|c| HeatmapPoint {
                latitude: c.latitude,
                longitude: c.longitude,
                weight: count,
            })
        })
        .collect()
}
