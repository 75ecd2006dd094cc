/// Mock GlContext for unit tests (no GPU required)
///
/// This mock models the context-wide binding state, hands out monotonically
/// increasing handles, tracks live allocations, and records every call so
/// tests can assert on exactly what reached the graphics API.

#[cfg(test)]
use std::collections::VecDeque;

#[cfg(test)]
use rustc_hash::FxHashMap;

#[cfg(test)]
use crate::context::{
    BufferHandle, BufferTarget, GlContext, GlErrorCode, IndexType,
    PrimitiveTopology, UsageHint, VertexAttrib,
};
#[cfg(test)]
use crate::error::Result;

/// One live mock allocation
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockAllocation {
    pub size: usize,
    pub hint: UsageHint,
}

/// Mock context that tracks buffer-object state without a GPU
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockContext {
    /// Next handle to hand out (handles start at 1; zero is the sentinel)
    next_handle: u32,
    /// Live allocations by raw handle value
    pub live: FxHashMap<u32, MockAllocation>,
    /// Current ARRAY_BUFFER binding
    bound_vertex: BufferHandle,
    /// Current ELEMENT_ARRAY_BUFFER binding
    bound_index: BufferHandle,
    /// Slots enabled via enable_vertex_attrib
    pub enabled_slots: Vec<u32>,
    /// Attribute layouts declared via vertex_attrib_pointer
    pub attribs: Vec<VertexAttrib>,
    /// Every call that reached the mock, in order
    pub calls: Vec<String>,
    /// Pending errors, oldest first
    errors: VecDeque<GlErrorCode>,
}

#[cfg(test)]
impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live allocations
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Queue an error for the next poll, as a failing driver would
    pub fn seed_error(&mut self, code: GlErrorCode) {
        self.errors.push_back(code);
    }

    /// Forget the recorded call log
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn bound(&self, target: BufferTarget) -> BufferHandle {
        match target {
            BufferTarget::Vertex => self.bound_vertex,
            BufferTarget::Index => self.bound_index,
        }
    }

    fn target_name(target: BufferTarget) -> &'static str {
        match target {
            BufferTarget::Vertex => "vertex",
            BufferTarget::Index => "index",
        }
    }
}

#[cfg(test)]
impl GlContext for MockContext {
    fn create_buffer(&mut self) -> Result<BufferHandle> {
        self.next_handle += 1;
        let handle = BufferHandle(self.next_handle);
        self.live.insert(
            handle.0,
            MockAllocation {
                size: 0,
                hint: UsageHint::Static,
            },
        );
        self.calls.push(format!("create_buffer -> {}", handle.0));
        Ok(handle)
    }

    fn delete_buffer(&mut self, handle: BufferHandle) {
        self.calls.push(format!("delete_buffer {}", handle.0));
        if handle.is_none() {
            return;
        }
        self.live.remove(&handle.0);
        // GL semantics: deleting a bound buffer reverts the binding to zero
        if self.bound_vertex == handle {
            self.bound_vertex = BufferHandle::NONE;
        }
        if self.bound_index == handle {
            self.bound_index = BufferHandle::NONE;
        }
    }

    fn bind_buffer(&mut self, target: BufferTarget, handle: BufferHandle) {
        self.calls.push(format!(
            "bind_buffer {} {}",
            Self::target_name(target),
            handle.0
        ));
        match target {
            BufferTarget::Vertex => self.bound_vertex = handle,
            BufferTarget::Index => self.bound_index = handle,
        }
    }

    fn buffer_binding(&self, target: BufferTarget) -> BufferHandle {
        self.bound(target)
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], hint: UsageHint) {
        self.calls.push(format!(
            "buffer_data {} {} bytes {:?}",
            Self::target_name(target),
            data.len(),
            hint
        ));
        let bound = self.bound(target);
        if bound.is_none() {
            self.errors.push_back(GlErrorCode::InvalidOperation);
            return;
        }
        if let Some(alloc) = self.live.get_mut(&bound.0) {
            alloc.size = data.len();
            alloc.hint = hint;
        }
    }

    fn enable_vertex_attrib(&mut self, slot: u32) {
        self.calls.push(format!("enable_vertex_attrib {}", slot));
        if !self.enabled_slots.contains(&slot) {
            self.enabled_slots.push(slot);
        }
    }

    fn vertex_attrib_pointer(&mut self, attrib: &VertexAttrib) {
        self.calls.push(format!(
            "vertex_attrib_pointer slot {} from buffer {}",
            attrib.slot, self.bound_vertex.0
        ));
        self.attribs.push(attrib.clone());
    }

    fn draw_elements(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
        offset_bytes: usize,
    ) {
        self.calls.push(format!(
            "draw_elements {:?} {} {:?} @{} (vbo {}, ibo {})",
            topology,
            index_count,
            index_type,
            offset_bytes,
            self.bound_vertex.0,
            self.bound_index.0
        ));
        if self.bound_vertex.is_none() || self.bound_index.is_none() {
            self.errors.push_back(GlErrorCode::InvalidOperation);
        }
    }

    fn poll_error(&mut self) -> Option<GlErrorCode> {
        self.errors.pop_front()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_context_tests.rs"]
mod tests;
