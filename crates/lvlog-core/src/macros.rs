//! Format-mode macros
//!
//! Each macro takes either a logger followed by a format string and
//! arguments, or just the format string and arguments, in which case the
//! standard logger is used:
//!
//! ```
//! use lvlog_core::{infof, Logger, Severity};
//!
//! let logger = Logger::new(Box::new(std::io::sink()), Severity::Info);
//! infof!(logger, "listening on {}", 8080);
//! infof!("standard logger, pid {}", std::process::id());
//! ```
//!
//! The reported file and line are those of the macro invocation.

#[macro_export]
macro_rules! tracef {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::tracef(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::debugf(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::infof(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::warnf(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::errorf(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}

/// Terminates the process after writing when the threshold admits FATAL
#[macro_export]
macro_rules! fatalf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::fatalf(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
}

/// Unwinds with a [`LogPanic`](crate::LogPanic) payload after writing
#[macro_export]
macro_rules! panicf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::standard::panicf(::core::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(::core::format_args!($($arg)+))
    };
}
