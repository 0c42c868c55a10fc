//! Severity levels
//!
//! Seven levels ordered by increasing urgency. Each level carries a fixed
//! display tag written in front of every emitted message and a lowercase name
//! used when a threshold is configured from text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Urgency of a log message.
///
/// Variants are declared in increasing order, so `Severity::Warning >
/// Severity::Info` and threshold checks are plain comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// Finest-grained tracing output; the most permissive threshold
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[serde(rename = "warn")]
    Warning = 3,
    Error = 4,
    /// Emitting at this level terminates the process after the write
    Fatal = 5,
    /// Emitting at this level unwinds the caller after the write
    Panic = 6,
}

impl Severity {
    /// All severities, least urgent first
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];

    /// Fixed tag written in front of the message, trailing space included
    ///
    /// ```
    /// use lvlog_core_types::Severity;
    ///
    /// assert_eq!(Severity::Warning.tag(), "[WARN] ");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Trace => "[TRACE] ",
            Severity::Debug => "[DEBUG] ",
            Severity::Info => "[INFO] ",
            Severity::Warning => "[WARN] ",
            Severity::Error => "[ERROR] ",
            Severity::Fatal => "[FATAL] ",
            Severity::Panic => "[PANIC] ",
        }
    }

    /// Canonical lowercase name, as accepted by [`Severity::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Panic => "panic",
        }
    }

    /// Case-insensitive lookup of a canonical name.
    ///
    /// Returns `None` for anything that is not one of the seven names; callers
    /// that want a hard error should use [`str::parse`] instead.
    pub fn from_name(name: &str) -> Option<Severity> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(name))
    }

    /// True when a message at `self` passes a logger set to `threshold`
    #[must_use]
    pub fn passes(self, threshold: Severity) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when text does not name a severity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{name}' (expected one of trace, debug, info, warn, error, fatal, panic)")]
pub struct ParseSeverityError {
    pub name: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_name(s.trim()).ok_or_else(|| ParseSeverityError {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_declaration() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should be below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_tags_are_bracketed_with_trailing_space() {
        for severity in Severity::ALL {
            let tag = severity.tag();
            assert!(tag.starts_with('['));
            assert!(tag.ends_with("] "));
        }
        assert_eq!(Severity::Info.tag(), "[INFO] ");
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(Severity::from_name("WARN"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("Panic"), Some(Severity::Panic));
        assert_eq!(Severity::from_name("warning"), None);
        assert_eq!(Severity::from_name(""), None);
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err.name, "verbose");
        assert!(err.to_string().contains("verbose"));
        assert_eq!(" info ".parse::<Severity>(), Ok(Severity::Info));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warn\"");
        let back: Severity = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(back, Severity::Fatal);
    }

    #[test]
    fn test_default_is_most_permissive() {
        assert_eq!(Severity::default(), Severity::Trace);
        assert!(Severity::ALL.iter().all(|s| s.passes(Severity::default())));
    }
}
