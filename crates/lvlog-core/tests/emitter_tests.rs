#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{bare_logger, CaptureSink};
use lvlog_core::{debugf, infof, LineFlags, LogPanic, Logger, Severity};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

/// Emit one message at `severity` in the given mode (0 = print, 1 = format, 2 = line)
fn emit(logger: &Logger, severity: Severity, mode: u8, text: &str) {
    match mode {
        0 => logger.log(severity, &[&text]),
        1 => logger.logf(severity, format_args!("{}", text)),
        _ => logger.logln(severity, &[&text]),
    }
}

fn non_terminal() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL[..5].to_vec())
}

proptest! {
    #[test]
    fn prop_emitted_iff_at_or_above_threshold(
        threshold in prop::sample::select(Severity::ALL.to_vec()),
        severity in non_terminal(),
        mode in 0u8..3,
    ) {
        let (logger, sink) = bare_logger(threshold);
        emit(&logger, severity, mode, "payload");

        if severity >= threshold {
            prop_assert_eq!(sink.write_calls(), 1);
            let text = sink.text();
            prop_assert!(text.contains(severity.tag()));
            prop_assert!(text.ends_with('\n'));
            prop_assert!(!text.ends_with("\n\n"));
        } else {
            prop_assert_eq!(sink.write_calls(), 0);
        }
    }

    #[test]
    fn prop_unknown_names_leave_threshold(
        start in prop::sample::select(Severity::ALL.to_vec()),
        name in "[a-z]{0,10}",
    ) {
        prop_assume!(Severity::from_name(&name).is_none());
        let (logger, _sink) = bare_logger(start);
        logger.set_level_from_name(&name);
        prop_assert_eq!(logger.level(), start);
    }
}

#[test]
fn test_every_mode_ends_with_exactly_one_newline() {
    let (logger, sink) = bare_logger(Severity::Trace);
    logger.warn(&[&"a", &"b"]);
    logger.warnf(format_args!("{}\n", "already terminated"));
    logger.warnln(&[&"c", &"d"]);

    assert_eq!(
        sink.text(),
        "[WARN] ab\n[WARN] already terminated\n[WARN] c d\n"
    );
    assert_eq!(sink.write_calls(), 3);
}

#[test]
fn test_info_threshold_scenario() {
    let (logger, sink) = bare_logger(Severity::Info);

    let x = 5;
    debugf!(logger, "debug: x={}", x);
    assert!(sink.text().is_empty());

    logger.info(&[&"started"]);
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[INFO] "));
    assert!(lines[0].contains("started"));

    let mut map = BTreeMap::new();
    map.insert("ka", "va");
    map.insert("kb", "vb");
    logger.print_json([&map]);
    assert_eq!(sink.lines()[1], r#"{"ka":"va","kb":"vb"}"#);
}

#[test]
fn test_print_json_ignores_threshold_and_writes_one_line_per_value() {
    let (logger, sink) = bare_logger(Severity::Panic);
    logger.print_json([serde_json::json!({"n": 1}), serde_json::json!([1, 2])]);
    assert_eq!(sink.lines(), vec![r#"{"n":1}"#, "[1,2]"]);
}

#[test]
fn test_print_json_lines_carry_flags_header_without_tag() {
    let sink = CaptureSink::default();
    let logger = Logger::builder()
        .sink(sink.clone())
        .prefix("svc: ")
        .flags(LineFlags::SHORT_FILE)
        .build();
    let line = line!() + 1;
    logger.print_json([serde_json::json!({"ok": true})]);
    assert_eq!(
        sink.text(),
        format!("svc: emitter_tests.rs:{line}: {{\"ok\":true}}\n")
    );
}

#[test]
fn test_set_level_from_name_round_trip() {
    let (logger, _sink) = bare_logger(Severity::Trace);
    for name in ["trace", "DEBUG", "Info", "wArN", "error", "FATAL", "panic"] {
        logger.set_level_from_name(name);
        assert_eq!(logger.level().name(), name.to_lowercase());
    }
}

#[test]
fn test_panic_line_written_before_recovery() {
    let (logger, sink) = bare_logger(Severity::Error);
    let result = catch_unwind(AssertUnwindSafe(|| {
        infof!(logger, "not written");
        logger.panicln(&[&"lost", &"quorum"]);
    }));

    let payload = result.expect_err("panic level must unwind");
    let panic = LogPanic::from_payload(payload.as_ref()).expect("LogPanic payload");
    assert_eq!(panic.message(), "lost quorum\n");
    assert_eq!(sink.text(), "[PANIC] lost quorum\n");
}

#[test]
fn test_panic_threshold_admits_only_panic() {
    let (logger, sink) = bare_logger(Severity::Panic);
    logger.set_level(Severity::Panic);
    logger.errorf(format_args!("quiet"));
    assert!(sink.text().is_empty());

    let result = catch_unwind(AssertUnwindSafe(|| logger.panic(&[&"loud"])));
    assert!(result.is_err());
}

#[test]
fn test_concurrent_emitters_do_not_interleave() {
    let sink = CaptureSink::default();
    let logger = Arc::new(
        Logger::builder()
            .sink(sink.clone())
            .flags(LineFlags::empty())
            .build(),
    );

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    logger.infoln(&[&"worker", &worker, &"message", &i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 400);
    assert!(lines
        .iter()
        .all(|line| line.starts_with("[INFO] worker ") && line.contains(" message ")));
}

#[test]
fn test_threshold_change_from_other_thread_is_seen() {
    let (logger, sink) = bare_logger(Severity::Trace);
    let logger = Arc::new(logger);

    let setter = Arc::clone(&logger);
    thread::spawn(move || setter.set_level(Severity::Error))
        .join()
        .unwrap();

    logger.warn(&[&"dropped"]);
    logger.error(&[&"kept"]);
    assert_eq!(sink.text(), "[ERROR] kept\n");
}

#[test]
fn test_default_header_has_date_time_and_file() {
    let sink = CaptureSink::default();
    let logger = Logger::new(Box::new(sink.clone()), Severity::Trace);
    logger.info(&[&"hello"]);

    let line = sink.text();
    // 2024/05/01 12:34:56 emitter_tests.rs:NN: [INFO] hello
    let parts: Vec<&str> = line.splitn(4, ' ').collect();
    assert_eq!(parts[0].len(), 10);
    assert_eq!(parts[0].matches('/').count(), 2);
    assert_eq!(parts[1].len(), 8);
    assert!(parts[2].starts_with("emitter_tests.rs:"));
    assert_eq!(parts[3], "[INFO] hello\n");
}
