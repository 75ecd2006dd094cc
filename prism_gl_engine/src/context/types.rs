/// Buffer-object descriptor types shared between the core and backends

use bitflags::bitflags;

// ===== BUFFER HANDLE =====

/// Opaque identifier naming a GPU-resident buffer allocation
///
/// A handle of zero means "not yet allocated"; a non-zero handle denotes a
/// live allocation owned exclusively by one resource. The raw value is the
/// GL object name and is passed through to the backend unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

impl BufferHandle {
    /// The unallocated handle
    pub const NONE: BufferHandle = BufferHandle(0);

    /// True if this handle names no allocation
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

// ===== BINDING TARGETS =====

/// Binding point for a buffer object in the graphics context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Vertex attribute data (GL ARRAY_BUFFER)
    Vertex,
    /// Index data (GL ELEMENT_ARRAY_BUFFER)
    Index,
}

bitflags! {
    /// Mask of binding targets, used by [`unbind_all`]
    ///
    /// [`unbind_all`]: crate::context::unbind_all
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BufferTargets: u32 {
        const VERTEX = 1 << 0;
        const INDEX = 1 << 1;
    }
}

// ===== USAGE HINT =====

/// Allocation-usage hint for a buffer transfer
///
/// Distinguishes data written once and reused many times from data rewritten
/// every frame. Purely advisory; the driver may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageHint {
    /// Written once, drawn many times (GL STATIC_DRAW)
    Static,
    /// Rewritten every frame (GL STREAM_DRAW)
    Stream,
}

// ===== COMPONENT TYPES =====

/// Component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribType {
    I8,
    U8,
    I16,
    U16,
    F32,
    /// 16.16 fixed point (GL ES legacy)
    Fixed,
}

impl AttribType {
    /// Size of a single component in bytes
    pub fn size_bytes(&self) -> u32 {
        match self {
            AttribType::I8 => 1,
            AttribType::U8 => 1,
            AttribType::I16 => 2,
            AttribType::U16 => 2,
            AttribType::F32 => 4,
            AttribType::Fixed => 4,
        }
    }
}

/// Component type of an index buffer element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U8,
    U16,
    U32,
}

impl IndexType {
    /// Size of a single index in bytes
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

// ===== PRIMITIVE TOPOLOGY =====

/// How the index stream is assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

// ===== VERTEX ATTRIBUTE DESCRIPTOR =====

/// Describes how a strided range of vertex-buffer bytes maps onto an
/// attribute slot consumed by a shader program
#[derive(Debug, Clone)]
pub struct VertexAttrib {
    /// Attribute slot index (resolved externally, e.g. via shader introspection)
    pub slot: u32,
    /// Number of components per vertex (1..=4)
    pub component_count: u32,
    /// Component type
    pub component_type: AttribType,
    /// Normalize integer components into [0,1] or [-1,1]
    pub normalized: bool,
    /// Distance in bytes between consecutive vertices (0 = tightly packed)
    pub stride_bytes: u32,
    /// Byte offset of the first component inside the buffer
    pub offset_bytes: usize,
}

// ===== ERROR CODES =====

/// Error codes surfaced by the graphics API's queryable error channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlErrorCode {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    /// Raw value not covered by the variants above
    Unknown(u32),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
