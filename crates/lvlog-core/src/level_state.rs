//! Threshold storage shared by all emitting threads

use lvlog_core_types::Severity;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Current minimum severity, guarded by a mutex.
///
/// `get` and `set` are linearizable with respect to each other. The emitter
/// reads the threshold once per call, so a concurrent `set` may or may not
/// affect a message that is already being emitted.
#[derive(Debug, Default)]
pub struct LevelState {
    threshold: Mutex<Severity>,
}

impl LevelState {
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold: Mutex::new(threshold),
        }
    }

    /// Current threshold
    pub fn get(&self) -> Severity {
        *self.lock()
    }

    /// Overwrite the threshold
    pub fn set(&self, threshold: Severity) {
        *self.lock() = threshold;
    }

    /// Set the threshold from one of the canonical names, ignoring case.
    ///
    /// Unrecognised names leave the threshold untouched and report nothing.
    pub fn set_from_name(&self, name: &str) {
        if let Some(threshold) = Severity::from_name(name) {
            self.set(threshold);
        }
    }

    // A `Severity` is always valid, so a guard recovered from a panicking
    // holder is still usable.
    fn lock(&self) -> MutexGuard<'_, Severity> {
        self.threshold.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
