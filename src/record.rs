use serde::{Deserialize, Serialize};

/// One normalized conversation log entry.
///
/// Text fields use the empty string for "absent", which is how the CSV
/// export represents missing cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,   // YYYY-MM-DD
    #[serde(default)]
    pub time: String,   // HH:MM or HH:MM:SS
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub user_question: String,
    #[serde(default)]
    pub assistant_answer: String,
    #[serde(default)]
    pub csat: String,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

const DEFAULT_TIME: &str = "00:00:00";

/// Composite key produced when both date and time are absent.
pub const EMPTY_TIMELINE_KEY: &str = "T00:00:00";

impl ConversationRecord {
    /// Hour of day in `[0, 23]`, or `None` when the time text cannot be read.
    ///
    /// An absent time reads as `0:0`, and an empty leading segment reads as zero.
    /// Fractional hours are not bucketed.
    pub fn hour(&self) -> Option<usize> {
        let time = if self.time.is_empty() { "0:0" } else { self.time.as_str() };
        let head = time.split(':').next().unwrap_or("").trim();
        if head.is_empty() {
            return Some(0);
        }
        // Signed and decimal spellings of a whole hour ("+7", "7.0") count.
        match head.parse::<f64>() {
            Ok(h) if h.is_finite() && h.fract() == 0.0 && (0.0..=23.0).contains(&h) => Some(h as usize),
            _ => None,
        }
    }

    /// Sortable `date T time` key; lexical order is chronological for ISO dates
    /// and zero-padded times.
    pub fn timeline_key(&self) -> String {
        let time = if self.time.is_empty() { DEFAULT_TIME } else { self.time.as_str() };
        format!("{}T{}", self.date, time)
    }

    pub fn latency_or_zero(&self) -> f64 {
        self.latency_ms.unwrap_or(0.0)
    }

    pub fn has_answer(&self) -> bool {
        !self.assistant_answer.trim().is_empty()
    }

    pub fn is_happy(&self) -> bool {
        self.csat.to_lowercase() == "happy"
    }

    /// Rows with no id, category or location carry nothing to aggregate.
    pub fn is_retained(&self) -> bool {
        !self.id.is_empty() || !self.category.is_empty() || !self.location.is_empty()
    }

    pub fn question_mentions(&self, needle_lower: &str) -> bool {
        self.user_question.to_lowercase().contains(needle_lower)
    }
}

/// Lenient latency parsing: numeric text yields a value, anything else is absent.
pub fn parse_latency(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
