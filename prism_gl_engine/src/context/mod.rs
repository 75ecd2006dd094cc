/// Context module - buffer-object types and the explicit GL context seam

// Module declarations
pub mod types;
pub mod context;
pub mod binding;
pub mod vertex_buffer;
pub mod mock_context;

// Re-export everything from the leaf modules
pub use types::*;
pub use context::*;
pub use binding::*;
pub use vertex_buffer::*;
