/// PrismGL Engine - Singleton manager for engine subsystems
///
/// This module provides global singleton management for the logger and the
/// registered graphics context. It uses thread-safe static storage with
/// RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::context::GlContext;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Context singleton (wrapped in Mutex for thread-safe mutable access)
    context: RwLock<Option<Arc<Mutex<dyn GlContext>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            context: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Manages the lifecycle of the registered graphics context and the logger
/// using a singleton pattern with thread-safe access. Registering a context
/// is optional: every buffer operation takes the context explicitly, and the
/// singleton only exists for applications that want one global context.
///
/// # Example
///
/// ```no_run
/// use prism_gl_engine::prismgl::Engine;
///
/// // Initialize engine
/// Engine::initialize()?;
///
/// // Register a context singleton, e.g. a NativeContext from a backend crate:
/// // Engine::create_context(backend_context)?;
///
/// // Access context globally
/// let context = Engine::context()?;
///
/// // Cleanup
/// Engine::shutdown();
/// # Ok::<(), prism_gl_engine::prismgl::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("prismgl::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!("prismgl::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!("prismgl::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    /// Initialize the engine
    ///
    /// This must be called once at application startup before registering a
    /// context. Idempotent.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the entire engine and destroy all singletons
    ///
    /// After calling this, you must call `initialize()` again before
    /// registering a new context.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut context) = state.context.write() {
                *context = None;
            }
        }
    }

    /// Create and register the context singleton
    ///
    /// Wraps the context in `Arc<Mutex<_>>` and registers it as a global
    /// singleton.
    ///
    /// # Arguments
    ///
    /// * `context` - Any type implementing the GlContext trait
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A context already exists
    /// - The context lock is poisoned
    pub fn create_context<C: GlContext + 'static>(context: C) -> Result<()> {
        let arc_context: Arc<Mutex<dyn GlContext>> = Arc::new(Mutex::new(context));

        Self::register_context(arc_context)?;

        crate::engine_info!("prismgl::Engine", "Context singleton created successfully");

        Ok(())
    }

    /// Register a context singleton (internal use)
    pub(crate) fn register_context(context: Arc<Mutex<dyn GlContext>>) -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let mut lock = state.context.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Context lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Context already exists. Call Engine::destroy_context() first.".to_string())
            ));
        }

        *lock = Some(context);
        Ok(())
    }

    /// Get the context singleton
    ///
    /// # Returns
    ///
    /// A shared pointer to the context wrapped in a Mutex
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The context has not been registered
    pub fn context() -> Result<Arc<Mutex<dyn GlContext>>> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let lock = state.context.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Context lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Context not created. Call Engine::create_context() first.".to_string())
            ))
    }

    /// Destroy the context singleton
    ///
    /// Removes the context singleton, allowing a new one to be registered.
    /// Existing references remain valid until dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_context() -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized".to_string())
            ))?;

        let mut lock = state.context.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Context lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("prismgl::Engine", "Context singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut context) = state.context.write() {
                *context = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation.
    ///
    /// # Arguments
    ///
    /// * `logger` - Any type implementing the Logger trait
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "prismgl::Engine")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! and engine_err! macros.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level (typically Error)
    /// * `source` - Source module (e.g., "prismgl::Engine")
    /// * `message` - Log message
    /// * `file` - Source file path
    /// * `line` - Source line number
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
