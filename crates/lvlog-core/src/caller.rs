//! Resolution of the file and line reported in front of a message.
//!
//! The emitting entry points are `#[track_caller]`, so the location handed in
//! here is already the first call site outside the logging crate and outside
//! any `#[track_caller]` wrapper. An extra caller depth walks further up a
//! captured backtrace for wrappers that cannot carry the attribute.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::panic::Location;

/// Frames whose symbol starts with one of these belong to the runtime or to
/// this crate and are never reported as the origin of a message.
const INTERNAL_SYMBOL_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "<std::",
    "<core::",
    "<alloc::",
    "lvlog_core::",
    "<lvlog_core::",
    "__rust",
];

/// File and line a message is attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl CallSite {
    /// Final path element, splitting on either separator
    pub fn short_file(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }
}

/// Resolve the reported call site.
///
/// With `extra_depth == 0` this is `location`. Otherwise the first frame
/// outside the runtime and this crate is found in a fresh backtrace and
/// `extra_depth` further frames are skipped. Falls back to `location` when the
/// backtrace has no usable frame there (stripped binary, inlined wrapper).
pub fn resolve(location: &'static Location<'static>, extra_depth: usize) -> CallSite {
    if extra_depth == 0 {
        return CallSite::from(location);
    }
    let rendered = Backtrace::force_capture().to_string();
    frame_at(&parse_frames(&rendered), extra_depth).unwrap_or_else(|| CallSite::from(location))
}

#[derive(Debug, PartialEq, Eq)]
struct Frame {
    symbol: String,
    site: Option<CallSite>,
}

impl Frame {
    fn is_internal(&self) -> bool {
        INTERNAL_SYMBOL_PREFIXES
            .iter()
            .any(|prefix| self.symbol.starts_with(prefix))
    }
}

fn frame_at(frames: &[Frame], extra_depth: usize) -> Option<CallSite> {
    let first_external = frames.iter().position(|frame| !frame.is_internal())?;
    frames
        .get(first_external + extra_depth)
        .and_then(|frame| frame.site.clone())
}

// Backtrace display format:
//    3: crate::module::function
//              at ./src/module.rs:12:5
fn parse_frames(rendered: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in rendered.lines().map(str::trim) {
        if let Some(at) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                if frame.site.is_none() {
                    frame.site = parse_site(at);
                }
            }
        } else if let Some((index, symbol)) = line.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(Frame {
                    symbol: symbol.to_string(),
                    site: None,
                });
            }
        }
    }
    frames
}

fn parse_site(at: &str) -> Option<CallSite> {
    let mut parts = at.rsplitn(3, ':');
    let _column = parts.next()?;
    let line = parts.next()?.parse().ok()?;
    let file = parts.next()?;
    Some(CallSite {
        file: Cow::Owned(file.to_string()),
        line,
    })
}
