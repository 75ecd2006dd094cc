//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Trace, LogSeverity::Debug);
    assert_ne!(LogSeverity::Warn, LogSeverity::Error);
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Info;
    let sev2 = sev1; // Copy, not move
    assert_eq!(sev1, sev2);
    assert_eq!(sev1, LogSeverity::Info);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "prismgl::test".to_string(),
        message: "message".to_string(),
        file: Some("log_tests.rs"),
        line: Some(42),
    };
    let cloned = entry.clone();
    assert_eq!(cloned.severity, LogSeverity::Warn);
    assert_eq!(cloned.source, "prismgl::test");
    assert_eq!(cloned.message, "message");
    assert_eq!(cloned.file, Some("log_tests.rs"));
    assert_eq!(cloned.line, Some(42));
}

// ============================================================================
// LOGGER IMPL TESTS
// ============================================================================

/// Logger that captures entries for verification
struct CaptureLogger {
    entries: std::sync::Mutex<Vec<String>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries
            .lock()
            .unwrap()
            .push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

#[test]
fn test_custom_logger_receives_entries() {
    let logger = CaptureLogger {
        entries: std::sync::Mutex::new(Vec::new()),
    };
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "prismgl::test".to_string(),
        message: "upload failed".to_string(),
        file: None,
        line: None,
    });
    let entries = logger.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], "Error: upload failed");
}

#[test]
fn test_default_logger_does_not_panic() {
    // Both formatting paths: with and without file:line
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "prismgl::test".to_string(),
        message: "plain".to_string(),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "prismgl::test".to_string(),
        message: "detailed".to_string(),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}
