//! Diagnostics macros
//!
//! The logger reports its own operational events (sink opened, write failed,
//! dump fallback) through `tracing`, never through the sink it manages. Each
//! event carries the canonical `component`, `op` and `event` fields.

/// Report a routine diagnostics event
macro_rules! diag_debug {
    ($op:expr, $event:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $event,
        );
    };
    ($op:expr, $event:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($field)*
        );
    };
}

/// Report a degraded path that the caller will not see as an error
macro_rules! diag_warn {
    ($op:expr, $event:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($field)*
        );
    };
}

/// Report a failure that is also returned to the caller
macro_rules! diag_error {
    ($op:expr, $event:expr, $($field:tt)*) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($field)*
        );
    };
}

pub(crate) use diag_debug;
pub(crate) use diag_error;
pub(crate) use diag_warn;
