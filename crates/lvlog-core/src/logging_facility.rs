//! Internal diagnostics for lvlog
//!
//! The logger's own operational events (file sink opened, sink write failed,
//! JSON dump fallback, config loaded) are reported through `tracing` rather
//! than through the sink a [`Logger`](crate::Logger) manages. This module
//! provides:
//!
//! - Single initialization point via `init(profile)`
//! - Crate-internal diagnostics macros carrying `component`, `op`, `event`
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use lvlog_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub(crate) mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedDiagnostic, DiagnosticCapture};
