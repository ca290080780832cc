//! Tests for summary statistics, plot series and the display table

use streamdash::analysis::{compute_summary_stats, SummaryStats};
use streamdash::generator::generate_with;
use streamdash::parsers::{CsvFile, RowSet};
use streamdash::view::{display_table, plot_series, XAxis};

use crate::common::{fixed_time, sample_files, seeded};

#[test]
fn test_min_le_mean_le_max() {
    for seed in 0..25 {
        let rows = generate_with(&mut seeded(seed), 1 + seed as usize * 7, fixed_time());
        match compute_summary_stats(&rows) {
            SummaryStats::Values { min, mean, max, count } => {
                assert_eq!(count, rows.len());
                assert!(min <= mean && mean <= max, "seed {}", seed);
            }
            SummaryStats::NoData => panic!("non-empty set produced no stats"),
        }
    }
}

#[test]
fn test_empty_stats_are_placeholders() {
    let stats = compute_summary_stats(&RowSet::default());
    assert_eq!(stats, SummaryStats::NoData);
    let rendered: Vec<String> = stats.display_rows().into_iter().map(|(_, v)| v).collect();
    assert_eq!(rendered, vec!["-", "-", "-"]);
}

#[test]
fn test_no_timestamp_upload_uses_index_and_na() {
    let rows = CsvFile.ingest(sample_files::NO_TIMESTAMP.as_bytes()).unwrap();

    let series = plot_series(&rows);
    assert_eq!(series.x_axis, XAxis::Index);
    let temps = series
        .lines
        .iter()
        .find(|l| l.label == "temperature")
        .unwrap();
    assert_eq!(temps.points, vec![[0.0, 10.0], [2.0, 30.0]]);

    let table = display_table(&rows);
    let ts_col = table.column_index("timestamp").unwrap();
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows.iter().all(|r| r[ts_col] == "N/A"));
    // Original order is kept when there is nothing to sort by
    let value_col = table.column_index("value").unwrap();
    assert_eq!(table.rows[0][value_col], "10");
}

#[test]
fn test_missing_metric_column_plots_as_unknown() {
    let rows = CsvFile
        .ingest(sample_files::MINIMAL_WITH_EXTRA.as_bytes())
        .unwrap();
    let series = plot_series(&rows);
    assert_eq!(series.lines.len(), 1);
    assert_eq!(series.lines[0].label, "unknown");
    assert_eq!(series.point_count(), 2);
}

#[test]
fn test_plot_sorted_ascending() {
    let mut rows = generate_with(&mut seeded(3), 40, fixed_time());
    rows.rows.reverse();
    let series = plot_series(&rows);
    assert_eq!(series.x_axis, XAxis::Time);
    for line in &series.lines {
        for pair in line.points.windows(2) {
            assert!(pair[0][0] <= pair[1][0]);
        }
    }
}

#[test]
fn test_table_latest_first_for_generated_rows() {
    let rows = generate_with(&mut seeded(4), 10, fixed_time());
    let table = display_table(&rows);
    assert_eq!(table.rows[0][0], "2024-06-01 08:30:00");
    assert_eq!(table.rows[9][0], "2024-06-01 08:29:42");
}
