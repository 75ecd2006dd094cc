//! Error types for the PrismGL engine
//!
//! This module defines the error type used throughout the engine, the
//! `Result` alias, and the `engine_err!` / `engine_bail!` macros that
//! construct an error and log it in one step.

use std::fmt;

/// Result type for PrismGL engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// PrismGL engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (native GL, mock, etc.)
    BackendError(String),

    /// Invalid resource (unallocated buffer handle, bad descriptor, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, context registration)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`Error::InvalidResource`], logging it as an ERROR with
/// file:line information.
///
/// # Example
///
/// ```no_run
/// fn check() -> prism_gl_engine::prismgl::Result<()> {
///     Err(prism_gl_engine::engine_err!("prismgl::VertexBufferObject",
///         "draw called before any upload"))
/// }
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::prismgl::Engine::log_detailed(
            $crate::prismgl::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::prismgl::Error::InvalidResource(message)
    }};
}

/// Log an ERROR and return early with [`Error::InvalidResource`].
///
/// # Example
///
/// ```no_run
/// fn check(slot: u32) -> prism_gl_engine::prismgl::Result<()> {
///     prism_gl_engine::engine_bail!("prismgl::VertexBufferObject",
///         "attribute slot {} described before vertex upload", slot);
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
