//! Payload of the unwind raised by PANIC-level messages

use std::any::Any;
use std::fmt;

/// Carried by the panic raised after a PANIC-level line has been written.
///
/// Distinguishable from any other panic by downcasting the payload returned
/// from [`std::panic::catch_unwind`]:
///
/// ```
/// use lvlog_core::{LogPanic, Logger, Severity};
/// use std::panic::{catch_unwind, AssertUnwindSafe};
///
/// let logger = Logger::new(Box::new(std::io::sink()), Severity::Trace);
/// let payload = catch_unwind(AssertUnwindSafe(|| logger.panicf(format_args!("disk {} gone", 2))))
///     .unwrap_err();
/// assert_eq!(LogPanic::from_payload(payload.as_ref()).unwrap().message(), "disk 2 gone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPanic {
    message: String,
}

impl LogPanic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Rendered message body, without tag or header
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Recover the payload of a panic raised by a PANIC-level message
    pub fn from_payload(payload: &(dyn Any + Send)) -> Option<&LogPanic> {
        payload.downcast_ref::<LogPanic>()
    }
}

impl fmt::Display for LogPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_payloads_are_not_log_panics() {
        let payload: Box<dyn Any + Send> = Box::new("plain panic");
        assert!(LogPanic::from_payload(payload.as_ref()).is_none());

        let payload: Box<dyn Any + Send> = Box::new(LogPanic::new("boom"));
        assert_eq!(LogPanic::from_payload(payload.as_ref()).unwrap().to_string(), "boom");
    }
}
