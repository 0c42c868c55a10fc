//! Core types shared across lvlog crates
//!
//! This crate provides the foundational types used by the logger and its
//! diagnostics facility:
//!
//! - **Severity**: the seven ordered urgency levels and their display tags
//! - **Schema constants**: canonical field keys and event names for the
//!   internal diagnostics channel

pub mod schema;
pub mod severity;

pub use severity::{ParseSeverityError, Severity};
