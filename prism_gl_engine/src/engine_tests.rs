//! Unit tests for Engine singleton manager
//!
//! Tests initialization, context registration, and the logging API.
//!
//! IMPORTANT: ENGINE_STATE is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::context::mock_context::MockContext;
use crate::log::{LogEntry, Logger};
use crate::prismgl::{Engine, Error};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

/// Reset engine state before each test
///
/// ENGINE_STATE is a OnceLock, so once initialized it stays initialized.
/// We always call initialize() (idempotent) and clear the context singleton.
fn setup() {
    Engine::reset_for_testing();
    let _ = Engine::initialize();
}

// ============================================================================
// INITIALIZATION AND SHUTDOWN TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_initialize_is_idempotent() {
    setup();
    assert!(Engine::initialize().is_ok());
    assert!(Engine::initialize().is_ok());
}

#[test]
#[serial]
fn test_engine_shutdown_clears_context() {
    setup();
    Engine::create_context(MockContext::new()).unwrap();
    assert!(Engine::context().is_ok());

    Engine::shutdown();

    assert!(Engine::context().is_err());
    let _ = Engine::initialize();
}

// ============================================================================
// CONTEXT SINGLETON TESTS
// ============================================================================

#[test]
#[serial]
fn test_create_and_get_context() {
    setup();
    Engine::create_context(MockContext::new()).unwrap();

    let context = Engine::context().unwrap();
    let mut guard = context.lock().unwrap();
    let handle = guard.create_buffer().unwrap();
    assert!(!handle.is_none());
}

#[test]
#[serial]
fn test_create_context_twice_fails() {
    setup();
    Engine::create_context(MockContext::new()).unwrap();

    let result = Engine::create_context(MockContext::new());
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_context_before_create_fails() {
    setup();
    let result = Engine::context();
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_destroy_context_allows_recreation() {
    setup();
    Engine::create_context(MockContext::new()).unwrap();

    Engine::destroy_context().unwrap();
    assert!(Engine::context().is_err());

    Engine::create_context(MockContext::new()).unwrap();
    assert!(Engine::context().is_ok());
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_custom_logger_captures_engine_logs() {
    setup();
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(TestLogger {
        entries: entries.clone(),
    });

    crate::engine_info!("prismgl::test", "hello {}", 42);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0], "Info: hello 42");
    }
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_failed_engine_calls_are_logged() {
    setup();
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(TestLogger {
        entries: entries.clone(),
    });

    // Context not registered: Engine::context() both errors and logs
    let result = Engine::context();
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert!(captured[0].starts_with("Error:"));
    }
    Engine::reset_logger();
}
