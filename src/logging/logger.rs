// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log sinks and the process-wide switches

use std::sync::atomic::{AtomicBool, Ordering};

use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};

/// Tag used by [`BuiltInLogger`] until [`set_log_tag`] is called
pub const DEFAULT_LOG_TAG: &str = "HttpLog";

/// Line emitted by [`BuiltInLogger::log_bottom_border`]
pub const BOTTOM_BORDER: &str =
    "└────────────────────────────────────────────────────────────────────────";

static ENABLED: AtomicBool = AtomicBool::new(false);

lazy_static! {
    static ref LOG_TAG: RwLock<String> = RwLock::new(DEFAULT_LOG_TAG.to_string());
}

/// Turn logging on or off for every interceptor in the process
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether the process-wide switch is on (off until enabled)
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Replace the tag attached to every built-in log line
pub fn set_log_tag(tag: impl Into<String>) {
    *LOG_TAG.write() = tag.into();
}

/// Current process-wide log tag
pub fn log_tag() -> String {
    LOG_TAG.read().clone()
}

/// Sink for formatted log lines
///
/// Called concurrently from every call running through an interceptor. Lines
/// from one call arrive in order; lines from different calls may interleave.
/// A sink that needs serialization provides it itself.
pub trait Logger: Send + Sync {
    /// Emit a single line
    fn log(&self, line: &str);

    /// Emit the terminator that closes one call's block
    fn log_bottom_border(&self);
}

/// Default sink writing through `tracing` at DEBUG level
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInLogger;

impl BuiltInLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for BuiltInLogger {
    fn log(&self, line: &str) {
        let tag = log_tag();
        tracing::debug!(target: "httplog", tag = %tag, "{}", line);
    }

    fn log_bottom_border(&self) {
        self.log(BOTTOM_BORDER);
    }
}

/// Sink that keeps every line in memory
///
/// Borders are stored as [`BOTTOM_BORDER`] so a block can be inspected in
/// emission order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded line
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of recorded lines, borders included
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Number of recorded borders
    pub fn borders(&self) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|l| l.as_str() == BOTTOM_BORDER)
            .count()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn log_bottom_border(&self) {
        self.log(BOTTOM_BORDER);
    }
}
