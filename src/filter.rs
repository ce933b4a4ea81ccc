use crate::record::ConversationRecord;

/// Keeps records whose ISO date lies within `[from, to]`, comparing text.
///
/// With no bound at all every record passes, including undated ones; with
/// any bound, undated records are dropped.
pub fn filter_by_date_range(
    records: &[ConversationRecord],
    from: Option<&str>,
    to: Option<&str>,
) -> Vec<ConversationRecord> {
    let from = from.filter(|s| !s.is_empty());
    let to = to.filter(|s| !s.is_empty());
    if from.is_none() && to.is_none() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            let date = r.date.as_str();
            if date.is_empty() {
                return false;
            }
            from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
        })
        .cloned()
        .collect()
}
