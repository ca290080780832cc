//! Tests for membership filtering

use streamdash::analysis::{filter, FilterSpec};
use streamdash::generator::generate_with;
use streamdash::parsers::{Row, RowSet};

use crate::common::{fixed_time, seeded};

#[test]
fn test_metric_scenario_keeps_first_row_only() {
    let rows = RowSet::with_standard_columns(vec![
        Row::new(fixed_time(), "sensor_1", "temperature", 1.0),
        Row::new(fixed_time(), "sensor_1", "humidity", 2.0),
    ]);
    let spec = FilterSpec::new(["temperature"], Vec::<String>::new());

    let out = filter(&rows, &spec);
    assert_eq!(out.rows, vec![rows.rows[0].clone()]);
}

#[test]
fn test_filter_idempotent_over_generated_sets() {
    let specs = [
        FilterSpec::default(),
        FilterSpec::new(["temperature"], Vec::<String>::new()),
        FilterSpec::new(Vec::<String>::new(), ["sensor_2", "sensor_4"]),
        FilterSpec::new(["humidity"], ["sensor_1"]),
        FilterSpec::new(["pressure"], Vec::<String>::new()),
    ];

    for seed in 0..20 {
        let rows = generate_with(&mut seeded(seed), 120, fixed_time());
        for spec in &specs {
            let once = filter(&rows, spec);
            assert_eq!(filter(&once, spec), once);
            assert!(once.rows.iter().all(|r| spec.matches(r)));
        }
    }
}

#[test]
fn test_unknown_metric_excludes_everything() {
    let rows = generate_with(&mut seeded(1), 50, fixed_time());
    let out = filter(&rows, &FilterSpec::new(["pressure"], Vec::<String>::new()));
    assert!(out.is_empty());
    assert_eq!(out.columns, rows.columns);
}

#[test]
fn test_empty_sensor_set_means_all() {
    let rows = generate_with(&mut seeded(2), 50, fixed_time());
    let out = filter(&rows, &FilterSpec::new(["temperature", "humidity"], Vec::<String>::new()));
    assert_eq!(out.len(), rows.len());
}
