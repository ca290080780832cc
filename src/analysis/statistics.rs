//! Summary statistics over the `value` column.

use crate::parsers::types::RowSet;

/// Placeholder shown for every statistic when there is nothing to summarise
pub const NO_DATA_PLACEHOLDER: &str = "-";

/// Mean, minimum and maximum of a row set's values
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SummaryStats {
    /// No finite values to summarise
    NoData,
    Values {
        count: usize,
        mean: f64,
        min: f64,
        max: f64,
    },
}

impl SummaryStats {
    pub fn is_empty(&self) -> bool {
        matches!(self, SummaryStats::NoData)
    }

    pub fn mean(&self) -> Option<f64> {
        match self {
            SummaryStats::Values { mean, .. } => Some(*mean),
            SummaryStats::NoData => None,
        }
    }

    pub fn min(&self) -> Option<f64> {
        match self {
            SummaryStats::Values { min, .. } => Some(*min),
            SummaryStats::NoData => None,
        }
    }

    pub fn max(&self) -> Option<f64> {
        match self {
            SummaryStats::Values { max, .. } => Some(*max),
            SummaryStats::NoData => None,
        }
    }

    /// Labelled, display-ready statistics: ("Average value", "101.23"), ...
    pub fn display_rows(&self) -> [(&'static str, String); 3] {
        [
            ("Average value", format_stat(self.mean())),
            ("Min value", format_stat(self.min())),
            ("Max value", format_stat(self.max())),
        ]
    }
}

fn format_stat(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| NO_DATA_PLACEHOLDER.to_string())
}

/// Compute summary statistics for a raw slice of values.
/// NaN and infinite entries are skipped, so all four fields cover the same values.
pub fn compute_stats(data: &[f64]) -> SummaryStats {
    let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return SummaryStats::NoData;
    }

    let count = finite.len();
    let mean = finite.iter().sum::<f64>() / count as f64;
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SummaryStats::Values {
        count,
        mean,
        min,
        max,
    }
}

/// Compute summary statistics for every row currently in the set
pub fn compute_summary_stats(rows: &RowSet) -> SummaryStats {
    compute_stats(&rows.values())
}
