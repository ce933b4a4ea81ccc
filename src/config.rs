use serde::{Deserialize, Serialize};

pub const DEFAULT_ANCHOR: &str = "Al Jafiliya";

/// Knobs for snapshot assembly. Every field has a default, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOpts {
    /// Landmark whose mentions in user questions anchor the hub-spoke view.
    pub anchor_landmark: String,
    /// Hub label shown to readers; falls back to the anchor when unset.
    pub hub_label: Option<String>,
    pub top_n: usize,
    pub conversion_top: usize,
    pub conversation_cap: usize,
}

impl Default for DashboardOpts {
    fn default() -> Self {
        Self {
            anchor_landmark: DEFAULT_ANCHOR.to_string(),
            hub_label: None,
            top_n: 10,
            conversion_top: 3,
            conversation_cap: 50,
        }
    }
}

impl DashboardOpts {
    pub fn hub_label(&self) -> &str {
        self.hub_label.as_deref().unwrap_or(&self.anchor_landmark)
    }
}
