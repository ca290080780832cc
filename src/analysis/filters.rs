//! Membership filtering by metric type and sensor id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::parsers::types::{Row, RowSet};

/// Allowed metric types and sensor ids.
///
/// An empty set means "no filtering" for that field, not "exclude all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub metrics: BTreeSet<String>,
    #[serde(default)]
    pub sensors: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new<M, S>(metrics: M, sensors: S) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            metrics: metrics.into_iter().map(Into::into).collect(),
            sensors: sensors.into_iter().map(Into::into).collect(),
        }
    }

    /// True when neither predicate narrows anything
    pub fn is_pass_through(&self) -> bool {
        self.metrics.is_empty() && self.sensors.is_empty()
    }

    /// Check a single row against both predicates.
    /// A row without the field only passes when that set is empty.
    pub fn matches(&self, row: &Row) -> bool {
        allows(&self.metrics, row.metric_type.as_deref())
            && allows(&self.sensors, row.sensor_id.as_deref())
    }
}

fn allows(allowed: &BTreeSet<String>, field: Option<&str>) -> bool {
    allowed.is_empty() || field.is_some_and(|f| allowed.contains(f))
}

/// Keep the rows matching `spec`, preserving their relative order
pub fn filter(rows: &RowSet, spec: &FilterSpec) -> RowSet {
    if spec.is_pass_through() {
        return rows.clone();
    }

    let kept: Vec<Row> = rows
        .rows
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();

    tracing::debug!("Filter kept {} of {} rows", kept.len(), rows.len());

    rows.with_rows(kept)
}
