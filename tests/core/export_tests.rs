//! Tests for CSV export and re-ingest

use streamdash::generator::generate_with;
use streamdash::parsers::{CsvFile, RowSet};
use streamdash::view::{export_csv, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};

use crate::common::{fixed_time, sample_files, seeded};

#[test]
fn test_export_metadata() {
    let export = export_csv(&RowSet::default()).unwrap();
    assert_eq!(EXPORT_FILE_NAME, "export.csv");
    assert_eq!(EXPORT_MIME_TYPE, "text/csv");
    assert_eq!(export.file_name, EXPORT_FILE_NAME);
    assert!(std::str::from_utf8(&export.bytes).is_ok());
}

#[test]
fn test_generated_rows_roundtrip() {
    // Sub-second wall-clock times are the realistic case for live mode
    let start = fixed_time() + chrono::Duration::milliseconds(123);

    for seed in 0..10 {
        let original = generate_with(&mut seeded(seed), 75, start);
        let export = export_csv(&original).unwrap();
        let reparsed = CsvFile.ingest(&export.bytes).unwrap();

        assert_eq!(reparsed.len(), original.len());
        assert_eq!(reparsed.columns, original.columns);

        for (a, b) in original.rows.iter().zip(&reparsed.rows) {
            assert_eq!(a.value, b.value);
            assert_eq!(a.sensor_id, b.sensor_id);
            assert_eq!(a.metric_type, b.metric_type);

            let (ta, tb) = (a.timestamp.unwrap(), b.timestamp.unwrap());
            assert!((ta - tb).num_seconds().abs() < 1);
        }
    }
}

#[test]
fn test_upload_roundtrip_keeps_extra_columns() {
    let original = CsvFile
        .ingest(sample_files::MINIMAL_WITH_EXTRA.as_bytes())
        .unwrap();
    let text = String::from_utf8(export_csv(&original).unwrap().bytes).unwrap();
    assert_eq!(text, "value,location\n1.5,north\n2.5,south\n");
}

#[test]
fn test_malformed_upload_is_an_error_not_a_panic() {
    assert!(CsvFile.ingest(sample_files::MALFORMED.as_bytes()).is_err());
}
