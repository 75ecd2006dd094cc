/// VertexBufferObject - a vertex/index buffer pair with its full lifecycle
///
/// Owns up to two GPU allocations: one for vertex attribute data, one for
/// index data. Both start unallocated and are created lazily by the first
/// upload. Teardown is explicit via [`VertexBufferObject::destroy`], since
/// releasing a GL object requires the owning context.

use bytemuck::Pod;

use crate::context::{
    unbind_all, BufferHandle, BufferTarget, BufferTargets, GlContext,
    IndexType, PrimitiveTopology, ScopedBufferBinding, UsageHint, VertexAttrib,
};
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_warn};

const SOURCE: &str = "prismgl::VertexBufferObject";

/// Vertex/index buffer pair
///
/// Each buffer has exactly two states, unallocated and allocated, with
/// allocation triggered by the first upload and released only by
/// [`destroy`](VertexBufferObject::destroy). Every operation takes the
/// graphics context explicitly and restores whatever buffer bindings it
/// found on entry, so interleaving operations across multiple instances is
/// safe with respect to binding state.
pub struct VertexBufferObject {
    vbo: BufferHandle,
    ibo: BufferHandle,
}

impl VertexBufferObject {
    /// Create an unallocated resource (both handles zero)
    pub fn new() -> Self {
        Self {
            vbo: BufferHandle::NONE,
            ibo: BufferHandle::NONE,
        }
    }

    /// Handle of the vertex buffer ([`BufferHandle::NONE`] until uploaded)
    pub fn vertex_handle(&self) -> BufferHandle {
        self.vbo
    }

    /// Handle of the index buffer ([`BufferHandle::NONE`] until uploaded)
    pub fn index_handle(&self) -> BufferHandle {
        self.ibo
    }

    /// Upload vertex attribute data
    ///
    /// Allocates a vertex buffer if none exists and transfers `data` into
    /// GPU memory. The buffer is bound only for the duration of the
    /// transfer; the previous binding is restored on exit.
    ///
    /// Re-uploading releases the previous allocation before creating the
    /// new one, so the old handle never leaks.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The current graphics context
    /// * `data` - Raw vertex bytes; not validated beyond what the backend does
    /// * `hint` - Streaming vs. write-once allocation hint
    pub fn upload_vertex_data(
        &mut self,
        ctx: &mut dyn GlContext,
        data: &[u8],
        hint: UsageHint,
    ) -> Result<()> {
        self.vbo = Self::upload(ctx, BufferTarget::Vertex, self.vbo, data, hint)?;
        Ok(())
    }

    /// Upload index data
    ///
    /// Symmetric to [`upload_vertex_data`](VertexBufferObject::upload_vertex_data),
    /// operating on the index buffer.
    pub fn upload_index_data(
        &mut self,
        ctx: &mut dyn GlContext,
        data: &[u8],
        hint: UsageHint,
    ) -> Result<()> {
        self.ibo = Self::upload(ctx, BufferTarget::Index, self.ibo, data, hint)?;
        Ok(())
    }

    /// Typed convenience over [`upload_vertex_data`](VertexBufferObject::upload_vertex_data)
    pub fn upload_vertices<T: Pod>(
        &mut self,
        ctx: &mut dyn GlContext,
        vertices: &[T],
        hint: UsageHint,
    ) -> Result<()> {
        self.upload_vertex_data(ctx, bytemuck::cast_slice(vertices), hint)
    }

    /// Typed convenience over [`upload_index_data`](VertexBufferObject::upload_index_data)
    pub fn upload_indices<T: Pod>(
        &mut self,
        ctx: &mut dyn GlContext,
        indices: &[T],
        hint: UsageHint,
    ) -> Result<()> {
        self.upload_index_data(ctx, bytemuck::cast_slice(indices), hint)
    }

    /// Shared upload path for both targets
    fn upload(
        ctx: &mut dyn GlContext,
        target: BufferTarget,
        current: BufferHandle,
        data: &[u8],
        hint: UsageHint,
    ) -> Result<BufferHandle> {
        if !current.is_none() {
            // Release-then-allocate policy: a second upload must not leak
            // the first allocation.
            engine_debug!(
                SOURCE,
                "re-upload to {:?} target releases handle {}",
                target,
                current.0
            );
            ctx.delete_buffer(current);
        }

        let handle = ctx.create_buffer()?;
        {
            let mut bound = ScopedBufferBinding::new(ctx, target, handle);
            bound.ctx().buffer_data(target, data, hint);
        }
        Ok(handle)
    }

    /// Declare how a strided range of the vertex buffer maps onto an
    /// attribute slot, and enable that slot
    ///
    /// Binds its own vertex buffer for the duration of the call; callers do
    /// not need any prior bind, and whatever was bound before is restored.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidResource` if no vertex data was uploaded yet.
    pub fn add_attribute(
        &self,
        ctx: &mut dyn GlContext,
        attrib: &VertexAttrib,
    ) -> Result<()> {
        if self.vbo.is_none() {
            engine_bail!(
                SOURCE,
                "attribute slot {} described before vertex upload",
                attrib.slot
            );
        }

        let mut bound = ScopedBufferBinding::new(ctx, BufferTarget::Vertex, self.vbo);
        bound.ctx().enable_vertex_attrib(attrib.slot);
        bound.ctx().vertex_attrib_pointer(attrib);
        Ok(())
    }

    /// Issue an indexed draw over this resource
    ///
    /// Binds both buffers, draws `index_count` indices of `index_type`
    /// starting at `first_index_byte_offset` into the index buffer assembled
    /// as `topology`, then restores the bindings found on entry.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidResource` if either buffer was never uploaded; no
    /// graphics call is issued in that case.
    pub fn draw(
        &self,
        ctx: &mut dyn GlContext,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
        first_index_byte_offset: usize,
    ) -> Result<()> {
        if self.vbo.is_none() || self.ibo.is_none() {
            engine_bail!(
                SOURCE,
                "draw called before upload (vbo: {}, ibo: {})",
                self.vbo.0,
                self.ibo.0
            );
        }

        let prev_vbo = ctx.buffer_binding(BufferTarget::Vertex);
        let prev_ibo = ctx.buffer_binding(BufferTarget::Index);

        ctx.bind_buffer(BufferTarget::Vertex, self.vbo);
        ctx.bind_buffer(BufferTarget::Index, self.ibo);
        ctx.draw_elements(topology, index_count, index_type, first_index_byte_offset);
        ctx.bind_buffer(BufferTarget::Index, prev_ibo);
        ctx.bind_buffer(BufferTarget::Vertex, prev_vbo);

        Ok(())
    }

    /// Release both GPU allocations
    ///
    /// Unbinds the vertex and index binding points unconditionally, then
    /// releases both handles. Releasing an unallocated handle is a no-op, so
    /// this is safe on a never-uploaded resource and idempotent when called
    /// twice.
    pub fn destroy(&mut self, ctx: &mut dyn GlContext) {
        unbind_all(ctx, BufferTargets::all());
        ctx.delete_buffer(self.vbo);
        ctx.delete_buffer(self.ibo);
        self.vbo = BufferHandle::NONE;
        self.ibo = BufferHandle::NONE;
    }
}

impl Default for VertexBufferObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexBufferObject {
    fn drop(&mut self) {
        // Releasing a GL object needs the owning context; without one, all
        // we can do is flag the leak.
        if !self.vbo.is_none() || !self.ibo.is_none() {
            engine_warn!(
                SOURCE,
                "dropped with live allocations (vbo: {}, ibo: {}); call destroy() first",
                self.vbo.0,
                self.ibo.0
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "vertex_buffer_tests.rs"]
mod tests;
