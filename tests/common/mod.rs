//! Common test utilities shared across all test modules

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fixed point in time so results do not depend on the wall clock
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid fixture time")
}

/// Deterministic random source
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Example upload contents
pub mod sample_files {
    /// All four standard columns
    pub const STANDARD: &str = "\
timestamp,sensor_id,metric_type,value
2024-06-01 08:00:00,sensor_1,temperature,99.5
2024-06-01 08:00:02,sensor_2,humidity,101.25
2024-06-01 08:00:04,sensor_3,temperature,100.75
";

    /// No timestamp column at all
    pub const NO_TIMESTAMP: &str = "\
sensor_id,metric_type,value
sensor_1,temperature,10.0
sensor_2,humidity,20.0
sensor_1,temperature,30.0
";

    /// Only the required column plus an unrecognised one
    pub const MINIMAL_WITH_EXTRA: &str = "\
value,location
1.5,north
2.5,south
";

    /// Middle row has an empty value cell
    pub const BLANK_VALUE: &str = "\
timestamp,value
2024-06-01 08:00:00,10.0
2024-06-01 08:00:02,
2024-06-01 08:00:04,30.0
";

    /// Ragged record: structural failure
    pub const MALFORMED: &str = "\
timestamp,value
2024-06-01 08:00:00,1.0,unexpected
";
}
