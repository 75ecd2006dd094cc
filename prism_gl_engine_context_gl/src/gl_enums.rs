/// Conversions between the core descriptor enums and raw GL enums
///
/// Pure mapping code, kept separate from the FFI calls so it can be unit
/// tested without a live context.

use gl::types::GLenum;

use prism_gl_engine::prismgl::render::{
    AttribType, BufferTarget, GlErrorCode, IndexType, PrimitiveTopology,
    UsageHint,
};

/// Map a binding target to its GL enum
pub fn target_to_gl(target: BufferTarget) -> GLenum {
    match target {
        BufferTarget::Vertex => gl::ARRAY_BUFFER,
        BufferTarget::Index => gl::ELEMENT_ARRAY_BUFFER,
    }
}

/// Map a usage hint to its GL enum
pub fn usage_to_gl(hint: UsageHint) -> GLenum {
    match hint {
        UsageHint::Static => gl::STATIC_DRAW,
        UsageHint::Stream => gl::STREAM_DRAW,
    }
}

/// Map an attribute component type to its GL enum
pub fn attrib_type_to_gl(ty: AttribType) -> GLenum {
    match ty {
        AttribType::I8 => gl::BYTE,
        AttribType::U8 => gl::UNSIGNED_BYTE,
        AttribType::I16 => gl::SHORT,
        AttribType::U16 => gl::UNSIGNED_SHORT,
        AttribType::F32 => gl::FLOAT,
        AttribType::Fixed => gl::FIXED,
    }
}

/// Map an index component type to its GL enum
pub fn index_type_to_gl(ty: IndexType) -> GLenum {
    match ty {
        IndexType::U8 => gl::UNSIGNED_BYTE,
        IndexType::U16 => gl::UNSIGNED_SHORT,
        IndexType::U32 => gl::UNSIGNED_INT,
    }
}

/// Map a primitive topology to its GL enum
pub fn topology_to_gl(topology: PrimitiveTopology) -> GLenum {
    match topology {
        PrimitiveTopology::Points => gl::POINTS,
        PrimitiveTopology::Lines => gl::LINES,
        PrimitiveTopology::LineLoop => gl::LINE_LOOP,
        PrimitiveTopology::LineStrip => gl::LINE_STRIP,
        PrimitiveTopology::Triangles => gl::TRIANGLES,
        PrimitiveTopology::TriangleStrip => gl::TRIANGLE_STRIP,
        PrimitiveTopology::TriangleFan => gl::TRIANGLE_FAN,
    }
}

/// Decode a raw glGetError value
///
/// Returns `None` for GL_NO_ERROR; values outside the known set come back
/// as [`GlErrorCode::Unknown`].
pub fn decode_gl_error(raw: GLenum) -> Option<GlErrorCode> {
    match raw {
        gl::NO_ERROR => None,
        gl::INVALID_ENUM => Some(GlErrorCode::InvalidEnum),
        gl::INVALID_VALUE => Some(GlErrorCode::InvalidValue),
        gl::INVALID_OPERATION => Some(GlErrorCode::InvalidOperation),
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            Some(GlErrorCode::InvalidFramebufferOperation)
        }
        gl::OUT_OF_MEMORY => Some(GlErrorCode::OutOfMemory),
        other => Some(GlErrorCode::Unknown(other)),
    }
}
