//! Single-line writer: header composition plus one write per line

use crate::caller::CallSite;
use crate::flags::LineFlags;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{Display, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Destination of formatted lines
pub type Sink = Box<dyn Write + Send>;

/// Writes already-formatted messages as complete lines.
///
/// Each line is assembled in memory and handed to the sink with a single
/// `write_all` followed by `flush`, under the sink lock, so concurrent lines
/// never interleave and a line is on its way to the OS before the call returns.
pub struct LineWriter {
    sink: Mutex<Sink>,
    prefix: String,
    flags: LineFlags,
}

impl LineWriter {
    pub fn new(sink: Sink, prefix: impl Into<String>, flags: LineFlags) -> Self {
        Self {
            sink: Mutex::new(sink),
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn flags(&self) -> LineFlags {
        self.flags
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Compose and write one line attributed to `site`
    pub fn write_line(&self, site: &CallSite, message: &str) -> io::Result<()> {
        let line = self.compose(Utc::now(), site, message);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(line.as_bytes())?;
        sink.flush()
    }

    /// Build the full line text, terminated by exactly one newline unless the
    /// message already supplies it
    pub(crate) fn compose(&self, now: DateTime<Utc>, site: &CallSite, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 48);
        if !self.flags.contains(LineFlags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }
        if self.flags.contains(LineFlags::UTC) {
            self.push_timestamp(&mut line, &now);
        } else {
            self.push_timestamp(&mut line, &now.with_timezone(&Local));
        }
        if self.flags.wants_file() {
            let file = if self.flags.contains(LineFlags::SHORT_FILE) {
                site.short_file()
            } else {
                &*site.file
            };
            let _ = write!(line, "{}:{}: ", file, site.line);
        }
        if self.flags.contains(LineFlags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn push_timestamp<Tz>(&self, line: &mut String, at: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.flags.contains(LineFlags::DATE) {
            let _ = write!(line, "{} ", at.format("%Y/%m/%d"));
        }
        if self.flags.wants_time() {
            if self.flags.contains(LineFlags::MICROSECONDS) {
                let _ = write!(line, "{} ", at.format("%H:%M:%S%.6f"));
            } else {
                let _ = write!(line, "{} ", at.format("%H:%M:%S"));
            }
        }
    }
}

impl std::fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
