//! CSV serialization of user records.
//!
//! The header is the key list of the first record, in response order. Later
//! records are projected onto that header: keys it lacks are dropped and
//! header columns a record lacks are written as empty fields.

use crate::error::Result;
use crate::types::UserRecord;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Column names taken from the first record, or empty for no records
pub fn header_for(records: &[UserRecord]) -> Vec<&str> {
    records
        .first()
        .map(|first| first.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Render one JSON value as a CSV field
///
/// Strings are written verbatim, booleans as `True`/`False`, `null` becomes
/// an empty field, and nested arrays or objects are written as compact JSON.
pub fn render_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

/// Write records as CSV to any writer; returns the number of data rows
///
/// Writes nothing at all, not even a header, when `records` is empty. When
/// the first record has no fields, every line (header included) is blank.
pub fn write_records<W: Write>(records: &[UserRecord], mut out: W) -> Result<usize> {
    if records.is_empty() {
        return Ok(0);
    }
    let header = header_for(records);

    // csv writes a zero-field record as `""`; keep such lines empty instead.
    if header.is_empty() {
        for _ in 0..=records.len() {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        return Ok(records.len());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(&header)?;
    for record in records {
        writer.write_record(
            header
                .iter()
                .map(|column| record.get(*column).map(render_field).unwrap_or_default()),
        )?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Write records to `path`, truncating any previous content
///
/// Returns `Ok(0)` without touching the filesystem when `records` is empty.
///
/// # Errors
/// Returns an I/O or CSV error if the file cannot be created or written. A
/// file that failed mid-write is left as is.
pub fn write_to_csv(records: &[UserRecord], path: &Path) -> Result<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    debug!(path = %path.display(), rows = records.len(), "writing CSV");
    let file = File::create(path)?;
    write_records(records, file)
}
