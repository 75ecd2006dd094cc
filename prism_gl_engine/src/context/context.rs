/// GlContext trait - the explicit binding-context seam
///
/// The graphics context's "currently bound buffer" is ambient, process-wide
/// state in the underlying API. Instead of relying on that ambient state,
/// every operation in this crate takes the context as an explicit parameter
/// through this trait, and backends confine the unsafe FFI behind it.

use crate::error::Result;
use crate::context::{
    BufferHandle, BufferTarget, GlErrorCode, IndexType, PrimitiveTopology,
    UsageHint, VertexAttrib,
};

/// Explicit handle to the graphics context's buffer-object surface
///
/// Implemented by backend-specific contexts (e.g. the native GL context) and
/// by the test mock. The implementor must be current on the calling thread
/// whenever a method is invoked; all operations are synchronous and
/// single-threaded by contract, the `Send` bound only exists so a context
/// can be parked in the [`Engine`](crate::prismgl::Engine) singleton
/// between frames.
///
/// Failures in the underlying API are not reported through return values;
/// they accumulate in the queryable error channel exposed by
/// [`poll_error`](GlContext::poll_error).
pub trait GlContext: Send {
    /// Allocate a new buffer object
    ///
    /// # Returns
    ///
    /// The handle naming the new allocation
    ///
    /// # Errors
    ///
    /// Returns an error if the backend hands back the zero name, which a
    /// healthy context never does.
    fn create_buffer(&mut self) -> Result<BufferHandle>;

    /// Release a buffer object
    ///
    /// Releasing [`BufferHandle::NONE`] is a no-op, never an error. If the
    /// buffer is currently bound to a target, the target reverts to no
    /// binding.
    fn delete_buffer(&mut self, handle: BufferHandle);

    /// Make `handle` the current buffer for `target`
    ///
    /// Binding [`BufferHandle::NONE`] leaves the target with no binding.
    /// This mutates context-wide state observable by every other caller.
    fn bind_buffer(&mut self, target: BufferTarget, handle: BufferHandle);

    /// The buffer currently bound to `target`
    fn buffer_binding(&self, target: BufferTarget) -> BufferHandle;

    /// Transfer `data` into the buffer currently bound to `target`
    ///
    /// Allocates (or reallocates) the buffer's storage to `data.len()` bytes
    /// using `hint`. With no buffer bound the call is invalid and surfaces
    /// through the error channel.
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], hint: UsageHint);

    /// Enable an attribute slot for subsequent draw calls
    fn enable_vertex_attrib(&mut self, slot: u32);

    /// Describe the layout of the attribute slot named by `attrib`
    ///
    /// The source of the attribute data is the buffer currently bound to
    /// [`BufferTarget::Vertex`].
    fn vertex_attrib_pointer(&mut self, attrib: &VertexAttrib);

    /// Issue an indexed draw call
    ///
    /// Draws `index_count` indices of `index_type`, read from the buffer
    /// currently bound to [`BufferTarget::Index`] starting at
    /// `offset_bytes`, assembled as `topology`.
    fn draw_elements(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
        offset_bytes: usize,
    );

    /// Pop the oldest pending error from the context's error channel
    ///
    /// Returns `None` when no error is pending. Callers that care about
    /// failure poll this after a batch of operations; nothing in this crate
    /// polls or clears it implicitly.
    fn poll_error(&mut self) -> Option<GlErrorCode>;
}
