//! Synthetic reading generator for the live and sample modes.
//!
//! Each batch has a slow upward drift (0.1 per row) on top of uniform noise.
//! The drift restarts at zero for every batch.

use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::parsers::types::{Row, RowSet};

/// Sensors the generator draws from
pub const SENSOR_IDS: &[&str] = &["sensor_1", "sensor_2", "sensor_3", "sensor_4"];

/// Metric types the generator draws from
pub const METRIC_TYPES: &[&str] = &["temperature", "humidity"];

/// Spacing between consecutive generated readings
pub const SAMPLE_SPACING_SECS: i64 = 2;

/// Baseline every generated value is centred on
const BASE_VALUE: f64 = 100.0;

/// Half-width of the uniform noise band
const NOISE_AMPLITUDE: f64 = 5.0;

/// Per-row drift within a batch
const DRIFT_PER_ROW: f64 = 0.1;

/// Generate `n` rows ending at `end_time` using the thread-local random source
pub fn generate(n: usize, end_time: NaiveDateTime) -> RowSet {
    generate_with(&mut rand::thread_rng(), n, end_time)
}

/// Generate `n` rows ending at `end_time`, oldest first, 2 seconds apart.
///
/// Row `i` is stamped `end_time - (n - 1 - i) * 2s`, so the last row lands
/// exactly on `end_time` rather than one spacing before it. Backfills and
/// ticks rely on this to end at the moment they were requested.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, n: usize, end_time: NaiveDateTime) -> RowSet {
    let rows = (0..n)
        .map(|i| {
            let steps_back = (n - 1 - i) as i64;
            let timestamp = end_time - Duration::seconds(steps_back * SAMPLE_SPACING_SECS);

            let sensor = SENSOR_IDS.choose(rng).copied().unwrap_or(SENSOR_IDS[0]);
            let metric = METRIC_TYPES.choose(rng).copied().unwrap_or(METRIC_TYPES[0]);

            let noise = rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
            let value = round2(BASE_VALUE + noise + i as f64 * DRIFT_PER_ROW);

            Row::new(timestamp, sensor, metric, value)
        })
        .collect();

    RowSet::with_standard_columns(rows)
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
