/// NativeContext - OpenGL implementation of the GlContext trait
///
/// Thin pass-through to the loaded GL function pointers. The unsafe FFI is
/// confined to this file; everything above it speaks the core trait.

use std::ffi::c_void;

use prism_gl_engine::engine_info;
use prism_gl_engine::prismgl::render::{
    BufferHandle, BufferTarget, GlContext, GlErrorCode, IndexType,
    PrimitiveTopology, UsageHint, VertexAttrib,
};
use prism_gl_engine::prismgl::{Error, Result};

use crate::gl_enums::{
    attrib_type_to_gl, decode_gl_error, index_type_to_gl, target_to_gl,
    topology_to_gl, usage_to_gl,
};

/// GL context backend driving the buffer-object entry points
///
/// The caller must have made a GL context current on this thread before
/// construction and must keep it current for every call. The struct itself
/// holds no state: GL function pointers are process-global once loaded.
pub struct NativeContext {
    _priv: (),
}

impl NativeContext {
    /// Load GL function pointers through `loader` and wrap the context
    ///
    /// # Arguments
    ///
    /// * `loader` - Symbol resolver from the context library
    ///   (e.g. `eglGetProcAddress` behind a closure)
    pub fn new<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        gl::load_with(loader);
        engine_info!("prismgl::gl::NativeContext", "OpenGL function pointers loaded");
        Self { _priv: () }
    }
}

impl GlContext for NativeContext {
    fn create_buffer(&mut self) -> Result<BufferHandle> {
        let mut name = 0;
        unsafe {
            gl::GenBuffers(1, &mut name);
        }
        if name == 0 {
            return Err(Error::BackendError(
                "glGenBuffers returned the zero name".to_string(),
            ));
        }
        Ok(BufferHandle(name))
    }

    fn delete_buffer(&mut self, handle: BufferHandle) {
        // glDeleteBuffers silently ignores the zero name
        unsafe {
            gl::DeleteBuffers(1, &handle.0);
        }
    }

    fn bind_buffer(&mut self, target: BufferTarget, handle: BufferHandle) {
        unsafe {
            gl::BindBuffer(target_to_gl(target), handle.0);
        }
    }

    fn buffer_binding(&self, target: BufferTarget) -> BufferHandle {
        let pname = match target {
            BufferTarget::Vertex => gl::ARRAY_BUFFER_BINDING,
            BufferTarget::Index => gl::ELEMENT_ARRAY_BUFFER_BINDING,
        };
        let mut name = 0;
        unsafe {
            gl::GetIntegerv(pname, &mut name);
        }
        BufferHandle(name as u32)
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], hint: UsageHint) {
        unsafe {
            gl::BufferData(
                target_to_gl(target),
                data.len() as isize,
                data.as_ptr() as *const c_void,
                usage_to_gl(hint),
            );
        }
    }

    fn enable_vertex_attrib(&mut self, slot: u32) {
        unsafe {
            gl::EnableVertexAttribArray(slot);
        }
    }

    fn vertex_attrib_pointer(&mut self, attrib: &VertexAttrib) {
        unsafe {
            gl::VertexAttribPointer(
                attrib.slot,
                attrib.component_count as i32,
                attrib_type_to_gl(attrib.component_type),
                if attrib.normalized { gl::TRUE } else { gl::FALSE },
                attrib.stride_bytes as i32,
                attrib.offset_bytes as *const c_void,
            );
        }
    }

    fn draw_elements(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
        offset_bytes: usize,
    ) {
        unsafe {
            gl::DrawElements(
                topology_to_gl(topology),
                index_count as i32,
                index_type_to_gl(index_type),
                offset_bytes as *const c_void,
            );
        }
    }

    fn poll_error(&mut self) -> Option<GlErrorCode> {
        let raw = unsafe { gl::GetError() };
        decode_gl_error(raw)
    }
}
