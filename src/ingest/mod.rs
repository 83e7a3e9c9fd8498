//! Tabular ingestion: column auto-detection, row validation, CSV reading.
//!
//! Row-level problems (unparseable dates, non-numeric or non-finite values)
//! drop the row and bump a counter; only shape problems (no columns, no
//! usable rows at all) are errors. Duplicate timestamps are kept in arrival
//! order and reported, never merged.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::TimePoint;
use crate::error::{AnomalyError, Result};

mod timestamp;

pub use timestamp::{format_timestamp, parse_timestamp};

/// Header fragments that mark the timestamp column.
const TIMESTAMP_KEYS: [&str; 3] = ["timestamp", "time", "date"];

/// Header fragments that mark the value column.
const VALUE_KEYS: [&str; 4] = ["value", "amount", "price", "count"];

/// Resolved input columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    /// Index of the timestamp column.
    pub timestamp_index: usize,
    /// Index of the value column.
    pub value_index: usize,
    /// Header of the timestamp column as found.
    pub timestamp_name: String,
    /// Header of the value column as found.
    pub value_name: String,
}

/// Ingest output: parsed points plus the row accounting the caller surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    /// Valid points, sorted ascending by timestamp (stable for ties).
    pub points: Vec<TimePoint>,
    /// Data rows seen, valid or not.
    pub rows_read: usize,
    /// Rows dropped for an unparseable timestamp or non-finite value.
    pub rows_skipped: usize,
    /// Points sharing a timestamp with an earlier point.
    pub duplicate_timestamps: usize,
    /// Columns the data was read from.
    pub columns: ColumnMap,
}

/// Locate the timestamp and value columns by case-insensitive substring
/// match, first hit wins per role.
pub fn detect_columns(headers: &[String]) -> Result<ColumnMap> {
    let find = |keys: &[&str]| {
        headers.iter().position(|header| {
            let lower = header.to_lowercase();
            keys.iter().any(|key| lower.contains(key))
        })
    };

    match (find(&TIMESTAMP_KEYS), find(&VALUE_KEYS)) {
        (Some(timestamp_index), Some(value_index)) => Ok(ColumnMap {
            timestamp_index,
            value_index,
            timestamp_name: headers[timestamp_index].clone(),
            value_name: headers[value_index].clone(),
        }),
        _ => Err(AnomalyError::MissingColumns {
            found: headers.join(", "),
        }),
    }
}

/// Validate raw rows into a sorted series of [`TimePoint`]s.
///
/// `headers` names the columns; each row is the corresponding cells.
/// Returns [`AnomalyError::EmptyData`] when there are no rows at all and
/// [`AnomalyError::NoValidRows`] when every row was dropped.
pub fn ingest_rows(headers: &[String], rows: &[Vec<String>]) -> Result<Ingested> {
    let columns = detect_columns(headers)?;
    if rows.is_empty() {
        return Err(AnomalyError::EmptyData);
    }

    let mut points: Vec<TimePoint> = Vec::with_capacity(rows.len());
    let mut rows_skipped = 0usize;
    for row in rows {
        let timestamp_cell = row.get(columns.timestamp_index).map(String::as_str).unwrap_or("");
        let value_cell = row.get(columns.value_index).map(String::as_str).unwrap_or("");

        let timestamp = parse_timestamp(timestamp_cell);
        let value = value_cell.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        match (timestamp, value) {
            (Some(timestamp), Some(value)) => points.push(TimePoint::new(timestamp, value)),
            _ => rows_skipped += 1,
        }
    }

    if points.is_empty() {
        return Err(AnomalyError::NoValidRows {
            rows_read: rows.len(),
        });
    }
    if rows_skipped > 0 {
        log::warn!("skipped {rows_skipped} of {} rows during ingest", rows.len());
    }

    points.sort_by_key(|p| p.timestamp);
    let duplicate_timestamps = points
        .windows(2)
        .filter(|pair| pair[0].timestamp == pair[1].timestamp)
        .count();
    if duplicate_timestamps > 0 {
        log::warn!("{duplicate_timestamps} duplicate timestamps in input, keeping all");
    }

    Ok(Ingested {
        points,
        rows_read: rows.len(),
        rows_skipped,
        duplicate_timestamps,
        columns,
    })
}

/// Ingest CSV data held in memory.
pub fn ingest_csv_str(data: &str) -> Result<Ingested> {
    ingest_csv_reader(data.as_bytes())
}

/// Open a CSV file, read it fully, and ingest it. The handle is released
/// before returning.
pub fn ingest_csv_path(path: &Path) -> Result<Ingested> {
    let file = File::open(path)?;
    ingest_csv_reader(file)
}

fn ingest_csv_reader<R: Read>(input: R) -> Result<Ingested> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AnomalyError::EmptyData);
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    ingest_rows(&headers, &rows)
}
