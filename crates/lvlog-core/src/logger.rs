//! Leveled logger
//!
//! A [`Logger`] gates every message on its current threshold, prepends the
//! severity tag, writes the line through its [`LineWriter`], and then applies
//! the severity's side effect:
//!
//! - `Panic`: unwinds the caller with a [`LogPanic`] payload
//! - `Fatal`: exits the process with status 1
//! - everything else: returns normally
//!
//! The line is flushed to the sink before either side effect, since it
//! records why the process stopped.
//!
//! Each severity has three entry points mirroring the usual print family:
//!
//! - `infof(format_args!(..))`: format arguments, rendered as-is
//! - `info(&[&a, &b])`: values concatenated without separators
//! - `infoln(&[&a, &b])`: values joined by single spaces plus a newline

use crate::caller::{self, CallSite};
use crate::errors::{LvlogError, Result};
use crate::flags::LineFlags;
use crate::level_state::LevelState;
use crate::line_writer::{LineWriter, Sink};
use crate::log_panic::LogPanic;
use crate::logging_facility::macros::{diag_debug, diag_error, diag_warn};
use lvlog_core_types::schema::{
    EVENT_FAILED, EVENT_FALLBACK, EVENT_OPENED, OP_OPEN_FILE, OP_PRINT_JSON, OP_WRITE_LINE,
};
use lvlog_core_types::Severity;
use serde::Serialize;
use std::fmt::{self, Display, Write as _};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;

/// Exit status used when a FATAL message terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Severity-filtering logger over a single sink.
///
/// `Logger` is `Send + Sync`; share it behind an `Arc` or a `static`.
#[derive(Debug)]
pub struct Logger {
    writer: LineWriter,
    level: LevelState,
    caller_depth: usize,
}

macro_rules! severity_methods {
    ($($severity:ident => $print:ident, $printf:ident, $println:ident;)*) => {
        $(
            #[doc = concat!("Emit at `", stringify!($severity), "`, values concatenated without separators")]
            #[track_caller]
            pub fn $print(&self, values: &[&dyn Display]) {
                self.log(Severity::$severity, values);
            }

            #[doc = concat!("Emit at `", stringify!($severity), "` from format arguments")]
            #[track_caller]
            pub fn $printf(&self, args: fmt::Arguments<'_>) {
                self.logf(Severity::$severity, args);
            }

            #[doc = concat!("Emit at `", stringify!($severity), "`, values space-separated with a trailing newline")]
            #[track_caller]
            pub fn $println(&self, values: &[&dyn Display]) {
                self.logln(Severity::$severity, values);
            }
        )*
    };
}

impl Logger {
    /// Logger over `sink` with the default header (date, time, short file)
    pub fn new(sink: Sink, level: Severity) -> Self {
        LoggerBuilder::new().sink_boxed(sink).level(level).build()
    }

    /// Logger appending to the file at `path`, created if missing.
    ///
    /// The file is closed when the logger is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LvlogError::SinkOpen`] if the file cannot be opened; no
    /// logger is produced in that case.
    pub fn open_file(path: impl AsRef<Path>, level: Severity, flags: LineFlags) -> Result<Self> {
        Ok(LoggerBuilder::new()
            .file(path)?
            .level(level)
            .flags(flags)
            .build())
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Current threshold
    pub fn level(&self) -> Severity {
        self.level.get()
    }

    pub fn set_level(&self, level: Severity) {
        self.level.set(level);
    }

    /// Set the threshold by name, ignoring case.
    ///
    /// Names other than trace, debug, info, warn, error, fatal and panic are
    /// ignored and the threshold stays as it was.
    pub fn set_level_from_name(&self, name: &str) {
        self.level.set_from_name(name);
    }

    /// True when a message at `severity` would currently be written
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.level.get())
    }

    /// Extra stack frames skipped when attributing a message to a call site
    pub fn caller_depth(&self) -> usize {
        self.caller_depth
    }

    pub fn flags(&self) -> LineFlags {
        self.writer.flags()
    }

    pub fn prefix(&self) -> &str {
        self.writer.prefix()
    }

    /// Emit at `severity` from format arguments
    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.emit(severity, Location::caller(), || fmt::format(args));
    }

    /// Emit at `severity`, values concatenated without separators
    #[track_caller]
    pub fn log(&self, severity: Severity, values: &[&dyn Display]) {
        self.emit(severity, Location::caller(), || render_concat(values));
    }

    /// Emit at `severity`, values separated by single spaces, newline-terminated
    #[track_caller]
    pub fn logln(&self, severity: Severity, values: &[&dyn Display]) {
        self.emit(severity, Location::caller(), || render_spaced(values));
    }

    severity_methods! {
        Trace => trace, tracef, traceln;
        Debug => debug, debugf, debugln;
        Info => info, infof, infoln;
        Warning => warn, warnf, warnln;
        Error => error, errorf, errorln;
        Fatal => fatal, fatalf, fatalln;
        Panic => panic, panicf, panicln;
    }

    /// Write each value as its own line of compact JSON.
    ///
    /// Not gated by the threshold and written without a severity tag. A value
    /// that fails to serialise is written as its `Debug` text followed by the
    /// serialisation error.
    #[track_caller]
    pub fn print_json<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Serialize + fmt::Debug,
    {
        let site = caller::resolve(Location::caller(), self.caller_depth);
        for value in values {
            let line = match serde_json::to_string(&value) {
                Ok(json) => json,
                Err(error) => {
                    diag_warn!(OP_PRINT_JSON, EVENT_FALLBACK, error = %error);
                    format!("{:?} {}", value, error)
                }
            };
            self.write(&site, &line);
        }
    }

    fn emit<F>(&self, severity: Severity, location: &'static Location<'static>, render: F)
    where
        F: FnOnce() -> String,
    {
        if !self.enabled(severity) {
            return;
        }

        let message = render();
        let site = caller::resolve(location, self.caller_depth);
        let mut line = String::with_capacity(severity.tag().len() + message.len());
        line.push_str(severity.tag());
        line.push_str(&message);
        self.write(&site, &line);

        match severity {
            Severity::Panic => std::panic::panic_any(LogPanic::new(message)),
            Severity::Fatal => std::process::exit(FATAL_EXIT_CODE),
            _ => {}
        }
    }

    // Sink failures are not the caller's problem; they go to diagnostics.
    fn write(&self, site: &CallSite, line: &str) {
        if let Err(error) = self.writer.write_line(site, line) {
            diag_warn!(OP_WRITE_LINE, EVENT_FAILED, error = %error);
        }
    }
}

fn render_concat(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = write!(out, "{}", value);
    }
    out
}

fn render_spaced(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out.push('\n');
    out
}

/// Builder for loggers that need a prefix, custom flags, or a caller depth
pub struct LoggerBuilder {
    sink: Option<Sink>,
    level: Severity,
    flags: LineFlags,
    prefix: String,
    caller_depth: usize,
}

impl LoggerBuilder {
    /// Defaults: stdout, threshold `Trace`, date/time/short-file header
    pub fn new() -> Self {
        Self {
            sink: None,
            level: Severity::Trace,
            flags: LineFlags::DEFAULT,
            prefix: String::new(),
            caller_depth: 0,
        }
    }

    pub fn sink(self, sink: impl Write + Send + 'static) -> Self {
        self.sink_boxed(Box::new(sink))
    }

    pub fn sink_boxed(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Append to the file at `path`, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns [`LvlogError::SinkOpen`] if the file cannot be opened.
    pub fn file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| {
                diag_error!(
                    OP_OPEN_FILE,
                    EVENT_FAILED,
                    path = %path.display(),
                    error = %source,
                );
                LvlogError::SinkOpen {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        diag_debug!(OP_OPEN_FILE, EVENT_OPENED, path = %path.display());
        Ok(self.sink(file))
    }

    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn flags(mut self, flags: LineFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Extra frames to skip for wrappers that are not `#[track_caller]`.
    ///
    /// Frames are found through a runtime backtrace, so this requires debug
    /// info in the binary. Without it (cargo's default release profile) the
    /// reported site silently stays at the wrapper; mark wrappers
    /// `#[track_caller]` instead when that matters.
    pub fn caller_depth(mut self, depth: usize) -> Self {
        self.caller_depth = depth;
        self
    }

    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        Logger {
            writer: LineWriter::new(sink, self.prefix, self.flags),
            level: LevelState::new(self.level),
            caller_depth: self.caller_depth,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
