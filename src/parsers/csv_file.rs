//! Parser for uploaded CSV files.
//!
//! Headers are matched by name. The `value` column is required; `timestamp`,
//! `sensor_id` and `metric_type` are optional, and every other column is
//! carried through to export untouched. Only the file structure can fail a
//! parse: a row whose value is blank or not a finite number is dropped, and
//! an unreadable timestamp is kept as missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use thiserror::Error;

use super::types::{
    Row, RowSet, METRIC_COLUMN, SENSOR_COLUMN, TIMESTAMP_COLUMN, VALUE_COLUMN,
};

/// Date-time layouts accepted in the `timestamp` column, tried in order.
/// `%.f` also matches when the fractional part is absent.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Date-only layouts, interpreted as midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Structural failures while reading an uploaded file
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file contained nothing but whitespace
    #[error("File is empty")]
    Empty,

    /// Malformed CSV structure (ragged rows, bad UTF-8, IO)
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not in the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Uploaded CSV parser
pub struct CsvFile;

impl CsvFile {
    /// Parse raw file bytes into a row set
    pub fn ingest(&self, bytes: &[u8]) -> Result<RowSet, IngestError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(IngestError::Empty);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let position = |name: &str| columns.iter().position(|c| c == name);
        let timestamp_idx = position(TIMESTAMP_COLUMN);
        let sensor_idx = position(SENSOR_COLUMN);
        let metric_idx = position(METRIC_COLUMN);
        let value_idx =
            position(VALUE_COLUMN).ok_or_else(|| IngestError::MissingColumn(VALUE_COLUMN.into()))?;

        let known = [timestamp_idx, sensor_idx, metric_idx, Some(value_idx)];

        let mut rows = Vec::new();
        let mut bad_timestamps = 0usize;
        let mut bad_values = 0usize;

        for record in reader.records() {
            let record = record?;

            let Some(value) = record.get(value_idx).and_then(parse_value) else {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                tracing::debug!("Skipping line {}: unusable value", line);
                bad_values += 1;
                continue;
            };

            let timestamp = match timestamp_idx.and_then(|i| record.get(i)) {
                Some(raw) => {
                    let parsed = parse_timestamp(raw);
                    if parsed.is_none() {
                        bad_timestamps += 1;
                    }
                    parsed
                }
                None => None,
            };

            let text_cell = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };

            let extra: BTreeMap<String, String> = columns
                .iter()
                .enumerate()
                .filter(|(i, _)| !known.contains(&Some(*i)))
                .map(|(i, name)| (name.clone(), record.get(i).unwrap_or_default().to_string()))
                .collect();

            rows.push(Row {
                timestamp,
                sensor_id: text_cell(sensor_idx),
                metric_type: text_cell(metric_idx),
                value,
                extra,
            });
        }

        if bad_values > 0 {
            tracing::warn!(
                "Dropped {} rows whose value was blank or not a finite number",
                bad_values
            );
        }
        if bad_timestamps > 0 {
            tracing::warn!(
                "{} of {} timestamps could not be parsed and are marked missing",
                bad_timestamps,
                rows.len()
            );
        }
        tracing::info!("Parsed {} rows with {} columns", rows.len(), columns.len());

        Ok(RowSet { columns, rows })
    }
}

/// Read a `value` cell; blanks, text, NaN and infinities are rejected
fn parse_value(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a timestamp cell, returning `None` for anything unrecognised.
/// Offsets are normalised to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
