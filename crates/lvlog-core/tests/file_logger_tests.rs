#![allow(clippy::unwrap_used, clippy::expect_used)]

use lvlog_core::{LineFlags, Logger, LvlogError, LvlogErrorKind, Severity};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_open_file_in_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("app.log");

    let err = Logger::open_file(&path, Severity::Info, LineFlags::STD).unwrap_err();

    assert_eq!(err.kind(), LvlogErrorKind::SinkUnavailable);
    match err {
        LvlogError::SinkOpen { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SinkOpen, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_file_logger_appends_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.log");

    {
        let logger = Logger::open_file(&path, Severity::Info, LineFlags::empty()).unwrap();
        logger.info(&[&"first"]);
        logger.debug(&[&"filtered"]);
    }
    {
        let logger = Logger::open_file(&path, Severity::Trace, LineFlags::empty()).unwrap();
        logger.debugln(&[&"second", &2]);
    }

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "[INFO] first\n[DEBUG] second 2\n");
}

#[test]
fn test_file_logger_flags_control_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flags.log");

    let logger = Logger::open_file(
        &path,
        Severity::Trace,
        LineFlags::SHORT_FILE | LineFlags::MSG_PREFIX,
    )
    .unwrap();
    assert_eq!(logger.flags(), LineFlags::SHORT_FILE | LineFlags::MSG_PREFIX);
    logger.errorf(format_args!("code {}", 7));
    drop(logger);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("file_logger_tests.rs:"), "got {contents:?}");
    assert!(contents.ends_with(": [ERROR] code 7\n"), "got {contents:?}");
}

#[test]
fn test_builder_prefix_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefixed.log");

    let logger = Logger::builder()
        .file(&path)
        .unwrap()
        .prefix("billing: ")
        .flags(LineFlags::empty())
        .level(Severity::Warning)
        .build();
    logger.info(&[&"hidden"]);
    logger.warn(&[&"late invoice"]);
    drop(logger);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "billing: [WARN] late invoice\n"
    );
}
