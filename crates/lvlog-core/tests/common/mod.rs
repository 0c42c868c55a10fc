//! Shared helpers for lvlog-core integration tests

#![allow(dead_code)]

use lvlog_core::{LineFlags, Logger, Severity};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink that records every write call
#[derive(Clone, Default)]
pub struct CaptureSink {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
}

impl CaptureSink {
    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// Number of `write` calls the logger made
    pub fn write_calls(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        *self.writes.lock().unwrap() += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that rejects every write
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger with no header, so lines are exactly tag + message
pub fn bare_logger(level: Severity) -> (Logger, CaptureSink) {
    let sink = CaptureSink::default();
    let logger = Logger::builder()
        .sink(sink.clone())
        .level(level)
        .flags(LineFlags::empty())
        .build();
    (logger, sink)
}
