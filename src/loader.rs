use crate::geocode::CoordinateReference;
use crate::record::{parse_latency, ConversationRecord};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV columns are missing expected header `{0}`")]
    MissingColumn(String),
    #[error("knowledge base root must be a JSON object of named groups")]
    InvalidReference,
}

pub const REQUIRED_COLUMN: &str = "id";

/// Header positions of the known columns; absent columns stay `None`.
struct ColumnIndex {
    id: Option<usize>,
    date: Option<usize>,
    time: Option<usize>,
    category: Option<usize>,
    sub_category: Option<usize>,
    location: Option<usize>,
    user_question: Option<usize>,
    assistant_answer: Option<usize>,
    csat: Option<usize>,
    latency_ms: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        ColumnIndex {
            id: find(REQUIRED_COLUMN),
            date: find("date"),
            time: find("time"),
            category: find("category"),
            sub_category: find("sub_category"),
            location: find("location"),
            user_question: find("user_question"),
            assistant_answer: find("assistant_answer"),
            csat: find("csat"),
            latency_ms: find("latency_ms"),
        }
    }

    /// Builds a record from one row; cells missing from short rows read as empty.
    fn record(&self, row: &StringRecord) -> ConversationRecord {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("").to_string();
        ConversationRecord {
            id: cell(self.id),
            date: cell(self.date),
            time: cell(self.time),
            category: cell(self.category),
            sub_category: cell(self.sub_category),
            location: cell(self.location),
            user_question: cell(self.user_question),
            assistant_answer: cell(self.assistant_answer),
            csat: cell(self.csat),
            latency_ms: parse_latency(&cell(self.latency_ms)),
        }
    }
}

/// Parses conversation CSV and drops rows with no id, category or location.
///
/// Rows may be ragged: extra cells are ignored and missing trailing cells
/// read as empty text.
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<ConversationRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let columns = ColumnIndex::from_headers(rdr.headers()?);
    if columns.id.is_none() {
        return Err(LoadError::MissingColumn(REQUIRED_COLUMN.to_string()));
    }

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for row in rdr.records() {
        let rec = columns.record(&row?);
        if rec.is_retained() {
            out.push(rec);
        } else {
            dropped += 1;
        }
    }
    debug!(rows = out.len(), dropped, "loaded conversation records");
    Ok(out)
}

pub fn load_records(path: &Path) -> Result<Vec<ConversationRecord>, LoadError> {
    let f = File::open(path)?;
    load_records_from_reader(BufReader::new(f))
}

pub fn load_reference(path: &Path) -> Result<CoordinateReference, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let reference = CoordinateReference::from_json_str(&text)?;
    debug!(locations = reference.len(), path = %path.display(), "loaded coordinate reference");
    Ok(reference)
}
