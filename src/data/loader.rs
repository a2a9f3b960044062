use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::model::{Column, Table};
use crate::error::LoadError;

/// Header name that marks the time column. Exact match, case-sensitive.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a `;`-delimited CSV file into a [`Table`].
///
/// The header row must contain a column literally named `Timestamp`; every
/// cell of that column must parse as a date-time (see [`parse_timestamp`]).
/// All other columns are read as `f64`, with unparseable cells becoming
/// `NaN`. Fails without partial results: either the whole file loads or
/// nothing does.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Malformed { row: 0, source })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let ts_idx = headers
        .iter()
        .position(|h| h == TIMESTAMP_COLUMN)
        .ok_or_else(|| LoadError::MissingTimestamp {
            found: headers.clone(),
        })?;

    // Series columns keep the file order, skipping the timestamp column.
    let series_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != ts_idx)
        .map(|(i, name)| (i, name.clone()))
        .collect();

    let mut timestamps = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); series_cols.len()];

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Malformed { row, source })?;

        let ts_cell = record.get(ts_idx).unwrap_or("");
        let ts = parse_timestamp(ts_cell).ok_or_else(|| LoadError::BadTimestamp {
            row,
            value: ts_cell.to_string(),
        })?;
        timestamps.push(ts);

        for (slot, (col_idx, _)) in series_cols.iter().enumerate() {
            let cell = record.get(*col_idx).unwrap_or("");
            values[slot].push(cell.parse::<f64>().unwrap_or(f64::NAN));
        }
    }

    let columns = series_cols
        .into_iter()
        .zip(values)
        .map(|((_, name), values)| Column { name, values })
        .collect();

    Ok(Table {
        timestamps,
        columns,
    })
}

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

/// Formats tried after RFC 3339, in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a timestamp cell, locale-independent.
///
/// Accepts RFC 3339 (offsets are normalized to UTC), the ISO-ish formats in
/// [`TIMESTAMP_FORMATS`], and a bare `%Y-%m-%d` date (midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    None
}
