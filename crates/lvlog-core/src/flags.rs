//! Line header composition flags

use crate::errors::{LvlogError, Result};
use bitflags::bitflags;

bitflags! {
    /// Controls what is written in front of every line.
    ///
    /// Header order is fixed: prefix, date, time, file:line, then the
    /// message (which starts with the severity tag).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFlags: u32 {
        /// Local date: `2009/01/23 `
        const DATE = 1 << 0;
        /// Local time: `01:23:23 `
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123 `. Implies TIME.
        const MICROSECONDS = 1 << 2;
        /// Full file path and line number: `/a/b/c.rs:23: `
        const LONG_FILE = 1 << 3;
        /// Final file name element and line number: `c.rs:23: `. Overrides LONG_FILE.
        const SHORT_FILE = 1 << 4;
        /// Render DATE and TIME in UTC rather than the local time zone
        const UTC = 1 << 5;
        /// Move the prefix from the start of the line to just before the message
        const MSG_PREFIX = 1 << 6;
    }
}

impl LineFlags {
    /// Date and time, the conventional header
    pub const STD: LineFlags = LineFlags::DATE.union(LineFlags::TIME);

    /// Header used by `Logger::new` and the standard logger
    pub const DEFAULT: LineFlags = LineFlags::STD.union(LineFlags::SHORT_FILE);

    /// Parse one flag name, ignoring case.
    ///
    /// Accepts the lowercase config spellings (`shortfile`, `msgprefix`, `std`)
    /// rather than the constant names.
    pub fn parse_name(name: &str) -> Result<LineFlags> {
        let flag = match name.trim().to_ascii_lowercase().as_str() {
            "date" => LineFlags::DATE,
            "time" => LineFlags::TIME,
            "microseconds" => LineFlags::MICROSECONDS,
            "longfile" => LineFlags::LONG_FILE,
            "shortfile" => LineFlags::SHORT_FILE,
            "utc" => LineFlags::UTC,
            "msgprefix" => LineFlags::MSG_PREFIX,
            "std" => LineFlags::STD,
            _ => {
                return Err(LvlogError::UnknownFlag {
                    flag: name.to_string(),
                })
            }
        };
        Ok(flag)
    }

    /// Union of every named flag; an empty list yields no header at all
    pub fn from_names<I, S>(names: I) -> Result<LineFlags>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(LineFlags::empty(), |acc, name| -> Result<LineFlags> {
                Ok(acc | LineFlags::parse_name(name.as_ref())?)
            })
    }

    /// Parse a comma separated list such as `date,time,shortfile`
    pub fn parse_list(list: &str) -> Result<LineFlags> {
        LineFlags::from_names(list.split(',').filter(|part| !part.trim().is_empty()))
    }

    pub(crate) fn wants_time(self) -> bool {
        self.intersects(LineFlags::TIME | LineFlags::MICROSECONDS)
    }

    pub(crate) fn wants_file(self) -> bool {
        self.intersects(LineFlags::LONG_FILE | LineFlags::SHORT_FILE)
    }
}

impl Default for LineFlags {
    fn default() -> Self {
        LineFlags::DEFAULT
    }
}
