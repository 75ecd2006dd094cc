/*!
# PrismGL Engine

Core traits and types for the PrismGL buffer-object layer.

This crate provides the platform-agnostic API for driving GPU buffer objects
(vertex and index data) through an explicit context seam. Backend
implementations (native OpenGL, test mocks) implement the [`GlContext`]
trait and are registered at runtime.

## Architecture

- **GlContext**: explicit binding-context trait implemented by backends
- **VertexBufferObject**: vertex/index buffer pair owning the
  create/upload/bind/draw/destroy cycle
- **ScopedBufferBinding**: RAII guard that restores the previous buffer
  binding on exit
- **Engine**: singleton access to the logger and the registered context

Backend implementations provide concrete types that implement `GlContext`.

[`GlContext`]: crate::context::GlContext
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod context;
pub mod color;
pub mod lighting;
pub mod shapes;

// Main prismgl namespace module
pub mod prismgl {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Context seam trait
    pub use crate::context::GlContext;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they live at the crate root
    }

    // Render sub-module with all buffer-object types
    pub mod render {
        pub use crate::context::*;
    }

    // Color-space conversion sub-module
    pub mod color {
        pub use crate::color::*;
    }

    // Diffuse shading math sub-module
    pub mod lighting {
        pub use crate::lighting::*;
    }

    // Canned geometry sub-module
    pub mod shapes {
        pub use crate::shapes::*;
    }
}

// Re-export math library at crate root
pub use glam;
