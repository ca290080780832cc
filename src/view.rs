//! Presentation artifacts derived from a (filtered) row set.
//!
//! Each derivation is a pure function of its input and returns a well-formed
//! result for an empty row set: an empty series, an empty table, a header-only
//! CSV payload.

use chrono::NaiveDateTime;

use crate::parsers::types::{
    Row, RowSet, METRIC_COLUMN, SENSOR_COLUMN, TIMESTAMP_COLUMN, VALUE_COLUMN,
};

/// Timestamp layout used by the display table and info summary
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout used in CSV exports (sub-second digits only when present)
pub const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Marker rendered in place of a missing timestamp
pub const MISSING_TIMESTAMP: &str = "N/A";

/// File name offered for the CSV download
pub const EXPORT_FILE_NAME: &str = "export.csv";

/// MIME type of the CSV download
pub const EXPORT_MIME_TYPE: &str = "text/csv";

// ============================================================================
// Plot series
// ============================================================================

/// What the horizontal axis of the plot represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxis {
    /// Seconds since the Unix epoch
    Time,
    /// Position of the row within the row set
    Index,
}

/// One line on the trend chart
#[derive(Clone, Debug, PartialEq)]
pub struct MetricLine {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Plot-ready data grouped by metric label
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    pub x_axis: XAxis,
    /// Lines in order of first appearance
    pub lines: Vec<MetricLine>,
}

impl PlotSeries {
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.points.is_empty())
    }

    pub fn point_count(&self) -> usize {
        self.lines.iter().map(|l| l.points.len()).sum()
    }
}

/// Convert a timestamp to fractional seconds for the chart axis
pub fn timestamp_to_seconds(ts: NaiveDateTime) -> f64 {
    ts.and_utc().timestamp_millis() as f64 / 1000.0
}

/// Rows sorted by timestamp, oldest first; rows without a timestamp go last.
/// The sort is stable, so ties keep their input order.
pub fn sorted_ascending(rows: &RowSet) -> Vec<&Row> {
    let mut sorted: Vec<&Row> = rows.rows.iter().collect();
    sorted.sort_by_key(|r| (r.timestamp.is_none(), r.timestamp));
    sorted
}

/// Build the trend chart series.
///
/// With at least one timestamp the x axis is time and rows without one are
/// left off the chart. Without any timestamps the positional index is used.
pub fn plot_series(rows: &RowSet) -> PlotSeries {
    let use_time = rows.has_any_timestamp();

    let points: Vec<(&str, [f64; 2])> = if use_time {
        sorted_ascending(rows)
            .into_iter()
            .filter_map(|r| {
                r.timestamp
                    .map(|ts| (r.metric_label(), [timestamp_to_seconds(ts), r.value]))
            })
            .collect()
    } else {
        rows.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (r.metric_label(), [i as f64, r.value]))
            .collect()
    };

    let mut lines: Vec<MetricLine> = Vec::new();
    for (label, point) in points {
        match lines.iter_mut().find(|l| l.label == label) {
            Some(line) => line.points.push(point),
            None => lines.push(MetricLine {
                label: label.to_string(),
                points: vec![point],
            }),
        }
    }

    PlotSeries {
        x_axis: if use_time { XAxis::Time } else { XAxis::Index },
        lines,
    }
}

// ============================================================================
// Display table
// ============================================================================

/// Latest-first table of display strings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Format a timestamp for display, `N/A` when missing
pub fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format(DISPLAY_TIME_FORMAT).to_string())
        .unwrap_or_else(|| MISSING_TIMESTAMP.to_string())
}

/// Build the raw-data table.
///
/// Sorted newest first when the set carries a timestamp column, original
/// order otherwise. The timestamp column is always shown.
pub fn display_table(rows: &RowSet) -> DisplayTable {
    let mut columns = rows.columns.clone();
    if !rows.has_timestamp_column() {
        columns.insert(0, TIMESTAMP_COLUMN.to_string());
    }

    let mut ordered: Vec<&Row> = rows.rows.iter().collect();
    if rows.has_timestamp_column() {
        // Descending puts missing timestamps last
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    let table_rows = ordered
        .into_iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| match column.as_str() {
                    TIMESTAMP_COLUMN => format_timestamp(row.timestamp),
                    _ => field_text(row, column),
                })
                .collect()
        })
        .collect();

    DisplayTable {
        columns,
        rows: table_rows,
    }
}

/// Text of every non-timestamp field, shared by the table and the export
fn field_text(row: &Row, column: &str) -> String {
    match column {
        SENSOR_COLUMN => row.sensor_id.clone().unwrap_or_default(),
        METRIC_COLUMN => row.metric_type.clone().unwrap_or_default(),
        VALUE_COLUMN => row.value.to_string(),
        other => row.extra.get(other).cloned().unwrap_or_default(),
    }
}

// ============================================================================
// CSV export
// ============================================================================

/// Downloadable CSV payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serialise the row set to CSV with a header row, in column order.
/// Missing timestamps are written as empty cells.
pub fn export_csv(rows: &RowSet) -> Result<CsvExport, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&rows.columns)?;

    for row in &rows.rows {
        writer.write_record(rows.columns.iter().map(|column| match column.as_str() {
            TIMESTAMP_COLUMN => row
                .timestamp
                .map(|t| t.format(EXPORT_TIME_FORMAT).to_string())
                .unwrap_or_default(),
            _ => field_text(row, column),
        }))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    Ok(CsvExport {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        bytes,
    })
}

// ============================================================================
// Info summary
// ============================================================================

/// The row/mode/last-timestamp lines shown beside the chart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoSummary {
    pub mode: String,
    pub row_count: usize,
    /// `None` when the set has no timestamp column
    pub last_timestamp: Option<String>,
}

impl InfoSummary {
    pub fn new(mode: impl Into<String>, rows: &RowSet) -> Self {
        let last_timestamp = rows
            .has_timestamp_column()
            .then(|| format_timestamp(rows.last_timestamp()));

        Self {
            mode: mode.into(),
            row_count: rows.len(),
            last_timestamp,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Mode: {}", self.mode),
            format!("Rows: {}", self.row_count),
        ];
        if let Some(ts) = &self.last_timestamp {
            lines.push(format!("Last timestamp: {}", ts));
        }
        lines
    }
}
