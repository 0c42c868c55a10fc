//! lvlog Core - leveled logging over a line-oriented sink
//!
//! This crate provides:
//! - [`Logger`]: severity filtering, caller file/line prefixing, and the
//!   FATAL (exit) and PANIC (unwind) side effects
//! - [`LevelState`]: the mutex-guarded threshold
//! - [`LineWriter`] and [`LineFlags`]: header composition and single-write lines
//! - [`standard`]: the process-wide default logger and its free functions
//! - [`LoggerConfig`]: TOML/environment configuration
//! - [`logging_facility`]: the logger's own diagnostics via `tracing`
//!
//! ```
//! use lvlog_core::{infof, Logger, Severity};
//!
//! let logger = Logger::new(Box::new(std::io::stderr()), Severity::Info);
//! logger.debugf(format_args!("suppressed"));
//! infof!(logger, "started with {} workers", 4);
//! logger.warnln(&[&"queue", &"depth", &17]);
//! ```

pub mod caller;
pub mod config;
pub mod errors;
pub mod flags;
pub mod level_state;
pub mod line_writer;
pub mod log_panic;
pub mod logger;
pub mod logging_facility;
mod macros;
pub mod standard;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use errors::{LvlogError, LvlogErrorKind, Result};
pub use flags::LineFlags;
pub use level_state::LevelState;
pub use line_writer::{LineWriter, Sink};
pub use log_panic::LogPanic;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use lvlog_core_types::{schema, ParseSeverityError, Severity};
