use std::collections::HashSet;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::domain::{Assignment, InputShape, OuiEntry};
use crate::error::OuiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Unique assignments in first-seen order.
    pub entries: Vec<OuiEntry>,
    /// Rows that passed validation, counted before deduplication.
    pub source_rows: usize,
}

/// Parses an IEEE or compact OUI CSV into deduplicated entries.
///
/// Malformed rows are skipped. Input without a header row is an error; a
/// blank first line counts as a missing header.
pub fn transform_csv(raw: &[u8]) -> Result<Transformed, OuiError> {
    let text = String::from_utf8_lossy(raw);
    // The csv reader skips blank lines, so check the first physical line here.
    if text.starts_with(['\n', '\r']) {
        return Err(OuiError::EmptyInput);
    }
    // A BOM must not hide a compact header.
    let body = text.strip_prefix('\u{feff}').unwrap_or(&*text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(Ok(header)) => header,
        Some(Err(err)) => {
            debug!(error = %err, "unreadable header row, assuming ieee-full");
            StringRecord::new()
        }
        None => return Err(OuiError::EmptyInput),
    };
    let shape = InputShape::detect(&header);
    debug!(%shape, bytes = raw.len(), "detected input shape");

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut source_rows = 0usize;
    let mut dropped = 0usize;

    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                debug!(error = %err, "skipping malformed CSV record");
                dropped += 1;
                continue;
            }
        };
        let Some(entry) = extract_entry(&record, shape) else {
            dropped += 1;
            continue;
        };
        source_rows += 1;
        if seen.insert(entry.assignment.clone()) {
            entries.push(entry);
        }
    }

    debug!(
        source_rows,
        dropped,
        unique = entries.len(),
        "transformed OUI rows"
    );
    Ok(Transformed {
        entries,
        source_rows,
    })
}

fn extract_entry(record: &StringRecord, shape: InputShape) -> Option<OuiEntry> {
    if record.len() < shape.min_columns() {
        return None;
    }
    let assignment: Assignment = record.get(shape.assignment_column())?.parse().ok()?;
    let org = record.get(shape.org_column())?.trim();
    Some(OuiEntry::new(assignment, org))
}
