//! Assertion reporting for bootstrap preconditions.
//!
//! A violated precondition has no safe default to fall back to, so it is
//! fatal. The failure is first handed to a [`DiagnosticSink`] and then
//! returned as [`LauncherError::Assertion`]; the binary decides how to exit.
//! Tests install a [`CollectingSink`] and inspect what was recorded.

use crate::error::{LauncherError, LauncherResult};
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::sync::Mutex;

/// A violated precondition with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssertionFailure {
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assertion Failed! {} {}:{}",
            self.message, self.file, self.line
        )
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, failure: &AssertionFailure);
}

/// Records failures as `tracing` error events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, failure: &AssertionFailure) {
        tracing::error!(
            op = "launcher.assertion",
            file = failure.file,
            line = failure.line,
            "{failure}"
        );
    }
}

/// Keeps every recorded failure in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    failures: Mutex<Vec<AssertionFailure>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.failures
            .lock()
            .map(|failures| failures.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, failure: &AssertionFailure) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(failure.clone());
        }
    }
}

/// Check a precondition, reporting the caller's location when it fails.
#[track_caller]
pub fn expects(sink: &dyn DiagnosticSink, condition: bool, message: &str) -> LauncherResult<()> {
    if condition {
        return Ok(());
    }
    let location = Location::caller();
    let failure = AssertionFailure {
        message: message.to_string(),
        file: location.file(),
        line: location.line(),
    };
    sink.record(&failure);
    Err(LauncherError::Assertion { failure })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_check_records_nothing() {
        let sink = CollectingSink::new();
        assert!(expects(&sink, true, "never shown").is_ok());
        assert!(sink.failures().is_empty());
    }

    #[test]
    fn failing_check_records_caller_location() {
        let sink = CollectingSink::new();
        let line = line!() + 1;
        let result = expects(&sink, false, "argc >= 0");
        let failures = sink.failures();
        assert_eq!(failures.len(), 1);
        let failure = failures.first().cloned();
        assert_eq!(failure.as_ref().map(|f| f.line), Some(line));
        assert!(failure.is_some_and(|f| f.file.ends_with("mod.rs")));
        assert!(matches!(result, Err(LauncherError::Assertion { .. })));
    }
}
