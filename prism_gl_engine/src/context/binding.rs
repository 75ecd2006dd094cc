/// Scoped binding guard and unbind helpers
///
/// Binding a buffer mutates context-wide state. The guard here makes every
/// bind scoped: it records what was bound before, binds the requested
/// buffer, and rebinds the recorded handle when it goes out of scope.

use crate::context::{BufferHandle, BufferTarget, BufferTargets, GlContext};

/// RAII guard holding a buffer bound to a target
///
/// On construction, records the target's current binding and binds `handle`.
/// On drop, restores the recorded binding. While the guard lives it is the
/// only access path to the context, so no other bind can interleave.
///
/// # Example
///
/// ```no_run
/// # use prism_gl_engine::prismgl::render::*;
/// # fn demo(ctx: &mut dyn GlContext, vbo: BufferHandle, bytes: &[u8]) {
/// let mut bound = ScopedBufferBinding::new(ctx, BufferTarget::Vertex, vbo);
/// bound.ctx().buffer_data(BufferTarget::Vertex, bytes, UsageHint::Static);
/// // previous binding restored here
/// # }
/// ```
pub struct ScopedBufferBinding<'a> {
    ctx: &'a mut dyn GlContext,
    target: BufferTarget,
    previous: BufferHandle,
}

impl<'a> ScopedBufferBinding<'a> {
    /// Bind `handle` to `target`, remembering the current binding
    pub fn new(
        ctx: &'a mut dyn GlContext,
        target: BufferTarget,
        handle: BufferHandle,
    ) -> Self {
        let previous = ctx.buffer_binding(target);
        ctx.bind_buffer(target, handle);
        Self {
            ctx,
            target,
            previous,
        }
    }

    /// Access the context while the binding is held
    pub fn ctx(&mut self) -> &mut dyn GlContext {
        &mut *self.ctx
    }

    /// The binding that will be restored on drop
    pub fn previous(&self) -> BufferHandle {
        self.previous
    }
}

impl Drop for ScopedBufferBinding<'_> {
    fn drop(&mut self) {
        self.ctx.bind_buffer(self.target, self.previous);
    }
}

/// Clear the bindings named by `targets`
///
/// Binds [`BufferHandle::NONE`] to each selected target unconditionally.
pub fn unbind_all(ctx: &mut dyn GlContext, targets: BufferTargets) {
    if targets.contains(BufferTargets::VERTEX) {
        ctx.bind_buffer(BufferTarget::Vertex, BufferHandle::NONE);
    }
    if targets.contains(BufferTargets::INDEX) {
        ctx.bind_buffer(BufferTarget::Index, BufferHandle::NONE);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
