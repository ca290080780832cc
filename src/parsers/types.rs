use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Column holding the point-in-time of a reading
pub const TIMESTAMP_COLUMN: &str = "timestamp";
/// Column holding the sensor identifier
pub const SENSOR_COLUMN: &str = "sensor_id";
/// Column holding the metric category
pub const METRIC_COLUMN: &str = "metric_type";
/// Column holding the numeric measurement
pub const VALUE_COLUMN: &str = "value";

/// Columns carried by every generated row set, in export order
pub const STANDARD_COLUMNS: &[&str] = &[TIMESTAMP_COLUMN, SENSOR_COLUMN, METRIC_COLUMN, VALUE_COLUMN];

/// Label used for rows that carry no metric type
pub const UNKNOWN_METRIC: &str = "unknown";

/// A single time-series reading
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    /// `None` when the source had no timestamp or the cell failed conversion
    pub timestamp: Option<NaiveDateTime>,
    pub sensor_id: Option<String>,
    pub metric_type: Option<String>,
    pub value: f64,
    /// Unrecognised columns, passed through untouched for export
    pub extra: BTreeMap<String, String>,
}

impl Row {
    /// Build a fully populated row (the shape the generator produces)
    pub fn new(
        timestamp: NaiveDateTime,
        sensor_id: impl Into<String>,
        metric_type: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            timestamp: Some(timestamp),
            sensor_id: Some(sensor_id.into()),
            metric_type: Some(metric_type.into()),
            value,
            extra: BTreeMap::new(),
        }
    }

    /// Metric label used for grouping and colouring
    pub fn metric_label(&self) -> &str {
        self.metric_type.as_deref().unwrap_or(UNKNOWN_METRIC)
    }
}

/// Ordered collection of rows plus the columns they carry
#[derive(Clone, Debug, PartialEq)]
pub struct RowSet {
    /// Column names in source order; drives CSV export
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Default for RowSet {
    fn default() -> Self {
        Self::with_standard_columns(Vec::new())
    }
}

impl RowSet {
    /// Create a row set carrying the four standard columns
    pub fn with_standard_columns(rows: Vec<Row>) -> Self {
        Self {
            columns: STANDARD_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// A row set with the same columns but different rows
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check whether the row set carries a column (case-sensitive, like the header)
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Whether the row set carries a timestamp column at all
    pub fn has_timestamp_column(&self) -> bool {
        self.has_column(TIMESTAMP_COLUMN)
    }

    /// Whether at least one row has a usable timestamp
    pub fn has_any_timestamp(&self) -> bool {
        self.rows.iter().any(|r| r.timestamp.is_some())
    }

    /// Get all values in row order
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.value).collect()
    }

    /// Latest timestamp present in the set
    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.iter().filter_map(|r| r.timestamp).max()
    }
}
