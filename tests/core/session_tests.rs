//! Tests for session passes across modes

use streamdash::analysis::FilterSpec;
use streamdash::session::{Mode, Notice, PassInput, Session, ALL_FILTERED_MESSAGE, SAMPLE_ROWS};

use crate::common::{fixed_time, sample_files};

fn pass(mode: Mode) -> PassInput {
    PassInput {
        mode,
        auto_refresh: true,
        filter: FilterSpec::default(),
        upload: None,
        now: fixed_time(),
    }
}

#[test]
fn test_live_pass_grows_then_caps() {
    let mut session = Session::new();
    let mut input = pass(Mode::Live);

    // First pass creates the 60-row backfill and ticks once
    assert_eq!(session.run_pass(&input).rows.len(), 65);

    for k in 2..=200i64 {
        input.now = fixed_time() + chrono::Duration::seconds(10 * k);
        let view = session.run_pass(&input);
        assert!(view.rows.len() <= 500);
    }
    assert_eq!(session.buffer().map(|b| b.len()), Some(500));
}

#[test]
fn test_live_pass_filters_without_touching_buffer() {
    let mut session = Session::new();
    let mut input = pass(Mode::Live);
    input.filter = FilterSpec::new(["nothing"], Vec::<String>::new());
    input.auto_refresh = false;

    let view = session.run_pass(&input);
    assert!(view.is_empty());
    assert_eq!(view.info.row_count, 0);
    assert_eq!(session.buffer().map(|b| b.len()), Some(60));
}

#[test]
fn test_upload_pass_with_valid_file() {
    let mut input = pass(Mode::Upload);
    input.upload = Some(sample_files::STANDARD.as_bytes().to_vec());

    let view = Session::new().run_pass(&input);
    assert_eq!(view.rows.len(), 3);
    assert!(view.notice.is_none());
    assert_eq!(
        view.info.lines(),
        vec![
            "Mode: Upload CSV".to_string(),
            "Rows: 3".to_string(),
            "Last timestamp: 2024-06-01 08:00:04".to_string(),
        ]
    );
    assert_eq!(view.stats.max(), Some(101.25));
}

#[test]
fn test_upload_pass_with_malformed_file() {
    let mut input = pass(Mode::Upload);
    input.upload = Some(sample_files::MALFORMED.as_bytes().to_vec());

    let view = Session::new().run_pass(&input);
    assert!(view.is_empty());
    assert!(view.plot.is_empty());
    assert!(view.table.is_empty());
    assert!(matches!(view.notice, Some(Notice::Warning(_))));

    let export = view.export().unwrap();
    assert_eq!(export.bytes, b"timestamp,sensor_id,metric_type,value\n".to_vec());
}

#[test]
fn test_sample_pass_export_matches_rows() {
    let view = Session::new().run_pass(&pass(Mode::Sample));
    let export = view.export().unwrap();
    let text = String::from_utf8(export.bytes).unwrap();
    assert_eq!(text.lines().count(), SAMPLE_ROWS + 1);
}

#[test]
fn test_live_passes_at_default_interval_stay_ordered() {
    let mut session = Session::new();
    let mut input = pass(Mode::Live);

    for k in 0..40i64 {
        input.now = fixed_time() + chrono::Duration::seconds(5 * k);
        let view = session.run_pass(&input);
        for pair in view.rows.rows.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp, "pass {}", k);
        }
    }
}

#[test]
fn test_upload_with_nan_value_keeps_stats_consistent() {
    let mut input = pass(Mode::Upload);
    input.upload = Some(b"value\n1.0\nnan\n3.0\n".to_vec());

    let view = Session::new().run_pass(&input);
    assert!(view.notice.is_none());
    let (min, mean, max) = (
        view.stats.min().unwrap(),
        view.stats.mean().unwrap(),
        view.stats.max().unwrap(),
    );
    assert!(min <= mean && mean <= max);
    assert_eq!(view.stats.display_rows()[0].1, "2.00");
}

#[test]
fn test_upload_with_blank_value_loads_remaining_rows() {
    let mut input = pass(Mode::Upload);
    input.upload = Some(sample_files::BLANK_VALUE.as_bytes().to_vec());

    let view = Session::new().run_pass(&input);
    assert!(view.notice.is_none());
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.stats.max(), Some(30.0));
}

#[test]
fn test_default_filter_on_bare_upload_explains_empty_view() {
    let mut input = pass(Mode::Upload);
    input.upload = Some(sample_files::MINIMAL_WITH_EXTRA.as_bytes().to_vec());
    input.filter = FilterSpec::new(["temperature", "humidity"], Vec::<String>::new());

    let view = Session::new().run_pass(&input);
    assert!(view.is_empty());
    assert_eq!(
        view.notice.as_ref().map(Notice::message),
        Some(ALL_FILTERED_MESSAGE)
    );
}
