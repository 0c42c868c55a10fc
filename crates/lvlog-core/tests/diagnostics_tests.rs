#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::BrokenSink;
use lvlog_core::logging_facility::init_test_capture;
use lvlog_core::schema::{
    EVENT_FAILED, EVENT_FALLBACK, EVENT_OPENED, FIELD_COMPONENT, FIELD_ERROR, FIELD_PATH,
    OP_OPEN_FILE, OP_PRINT_JSON, OP_WRITE_LINE,
};
use lvlog_core::{LineFlags, Logger, Severity};
use std::collections::HashMap;
use tempfile::TempDir;

#[test]
fn test_write_failure_is_reported_not_raised() {
    let capture = init_test_capture();
    let logger = Logger::builder()
        .sink(BrokenSink)
        .flags(LineFlags::empty())
        .build();

    logger.error(&[&"nobody hears this"]);

    capture.assert_event_exists(OP_WRITE_LINE, EVENT_FAILED);
    let failures = capture.find(OP_WRITE_LINE, EVENT_FAILED);
    let failure = failures
        .iter()
        .find(|e| e.field(FIELD_ERROR).is_some_and(|err| err.contains("sink closed")))
        .expect("write failure carries the sink error");
    assert_eq!(failure.field(FIELD_COMPONENT), Some("lvlog_core::logger"));
}

#[test]
fn test_open_file_events_carry_path() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("ok.log");
    let bad = temp_dir.path().join("missing").join("bad.log");

    let _logger = Logger::open_file(&good, Severity::Info, LineFlags::STD).unwrap();
    assert!(Logger::open_file(&bad, Severity::Info, LineFlags::STD).is_err());

    let good_str = good.display().to_string();
    let bad_str = bad.display().to_string();
    assert!(capture
        .find(OP_OPEN_FILE, EVENT_OPENED)
        .iter()
        .any(|e| e.field(FIELD_PATH) == Some(good_str.as_str())));
    assert!(capture
        .find(OP_OPEN_FILE, EVENT_FAILED)
        .iter()
        .any(|e| e.field(FIELD_PATH) == Some(bad_str.as_str())));
}

#[test]
fn test_json_fallback_is_reported() {
    let capture = init_test_capture();
    let logger = Logger::builder()
        .sink(std::io::sink())
        .flags(LineFlags::empty())
        .build();

    let mut unserialisable: HashMap<Vec<u8>, u8> = HashMap::new();
    unserialisable.insert(vec![1], 1);
    logger.print_json([unserialisable]);

    capture.assert_event_exists(OP_PRINT_JSON, EVENT_FALLBACK);
}
