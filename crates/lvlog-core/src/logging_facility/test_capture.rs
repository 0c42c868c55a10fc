//! Test capture mode for diagnostics assertions
//!
//! A `tracing` layer that records every diagnostics event in memory, so
//! tests can assert that, say, a failed sink write was reported.

use lvlog_core_types::schema::{FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded diagnostics event
#[derive(Clone, Debug)]
pub struct CapturedDiagnostic {
    pub level: Level,
    pub target: String,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedDiagnostic {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn matches(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer feeding a [`DiagnosticCapture`]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedDiagnostic>>>,
}

impl CaptureLayer {
    pub fn new() -> (Self, DiagnosticCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: Arc::clone(&events),
        };
        (layer, DiagnosticCapture { events })
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedDiagnostic {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            op: visitor.fields.get(FIELD_OP).cloned(),
            event: visitor.fields.get(FIELD_EVENT).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Handle for reading captured diagnostics
#[derive(Clone)]
pub struct DiagnosticCapture {
    events: Arc<Mutex<Vec<CapturedDiagnostic>>>,
}

impl DiagnosticCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedDiagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Captured events for one operation and event name
    pub fn find(&self, op: &str, event: &str) -> Vec<CapturedDiagnostic> {
        self.events()
            .into_iter()
            .filter(|e| e.matches(op, event))
            .collect()
    }

    /// Assert that at least one event with the given op and event was captured
    ///
    /// # Panics
    ///
    /// Panics if no such event exists
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.matches(op, event)),
            "Expected diagnostic op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

static GLOBAL_CAPTURE: OnceLock<DiagnosticCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return its handle.
///
/// Every call returns a handle to the same buffer, so tests running in
/// parallel should match on values unique to themselves (a file path, for
/// instance) rather than on counts. If another global subscriber is already
/// installed the handle stays empty.
pub fn init_test_capture() -> DiagnosticCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = CaptureLayer::new();
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}
