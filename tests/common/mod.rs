#![allow(dead_code)]

use convoscope::ConversationRecord;

pub fn rec(date: &str, time: &str, category: &str, location: &str) -> ConversationRecord {
    ConversationRecord {
        id: format!("{date}-{time}-{location}"),
        date: date.to_string(),
        time: time.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        ..Default::default()
    }
}

pub fn at_hour(hour: usize, category: &str) -> ConversationRecord {
    rec("2025-03-10", &format!("{hour:02}:15"), category, "Somewhere")
}

pub fn at(location: &str) -> ConversationRecord {
    rec("2025-03-10", "10:00", "Food & Beverages", location)
}
