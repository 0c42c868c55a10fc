//! Canonical schema constants for the internal diagnostics channel
//!
//! These constants keep the `tracing` events emitted by the logger itself
//! consistent, so tests and subscribers can match on them.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Context fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_ERROR: &str = "error";

// Operations
pub const OP_OPEN_FILE: &str = "open_file";
pub const OP_WRITE_LINE: &str = "write_line";
pub const OP_PRINT_JSON: &str = "print_json";
pub const OP_LOAD_CONFIG: &str = "load_config";

// Canonical event names
pub const EVENT_OPENED: &str = "opened";
pub const EVENT_FAILED: &str = "failed";
pub const EVENT_FALLBACK: &str = "fallback";
pub const EVENT_LOADED: &str = "loaded";
