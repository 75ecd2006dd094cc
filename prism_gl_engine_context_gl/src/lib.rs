/*!
# PrismGL native OpenGL context

Native backend for `prism_gl_engine`, implementing the [`GlContext`] trait
over raw OpenGL function pointers loaded from an existing, current context.

This crate does no windowing and creates no context of its own: the caller
brings up EGL/GLX/WGL (or a library like glutin) and hands the symbol loader
to [`NativeContext::new`].

[`GlContext`]: prism_gl_engine::prismgl::GlContext
*/

mod gl_context;
mod gl_enums;

pub use gl_context::NativeContext;
pub use gl_enums::{
    attrib_type_to_gl, decode_gl_error, index_type_to_gl, target_to_gl,
    topology_to_gl, usage_to_gl,
};
