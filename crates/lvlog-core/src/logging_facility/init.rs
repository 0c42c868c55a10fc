//! Diagnostics initialization
//!
//! Installs the `tracing` subscriber that receives the logger's own
//! diagnostics. Lines written through a `Logger` are unaffected.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable diagnostics on stderr, debug level
    Development,
    /// JSON diagnostics on stderr, info level
    Production,
    /// Capture mode; see [`init_test_capture`](super::init_test_capture)
    Test,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "lvlog_core=debug",
            Profile::Production | Profile::Test => "lvlog_core=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize diagnostics once per process.
///
/// `RUST_LOG` overrides the profile's default filter. Later calls, and calls
/// made after another global subscriber was installed, do nothing.
///
/// ```
/// use lvlog_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// init(Profile::Development); // no-op
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        // try_init: a host application may already own the global subscriber
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
