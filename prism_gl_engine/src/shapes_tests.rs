//! Unit tests for the cube geometry

use crate::context::mock_context::MockContext;
use crate::context::{
    AttribType, GlContext, IndexType, PrimitiveTopology, UsageHint,
    VertexAttrib, VertexBufferObject,
};
use crate::shapes::{
    cube_vertices, CUBE_FLOATS_PER_VERTEX, CUBE_INDEX_COUNT, CUBE_INDICES,
    CUBE_NORMAL_OFFSET, CUBE_POSITION_OFFSET, CUBE_STRIDE_BYTES,
    CUBE_TEXCOORD_OFFSET, CUBE_VERTEX_COUNT,
};

// ============================================================================
// LAYOUT TESTS
// ============================================================================

#[test]
fn test_layout_constants_are_consistent() {
    assert_eq!(CUBE_STRIDE_BYTES, 32);
    assert_eq!(CUBE_POSITION_OFFSET, 0);
    assert_eq!(CUBE_NORMAL_OFFSET, 12);
    assert_eq!(CUBE_TEXCOORD_OFFSET, 24);
}

#[test]
fn test_vertex_stream_length() {
    let vertices = cube_vertices(1.0);
    assert_eq!(vertices.len(), CUBE_VERTEX_COUNT * CUBE_FLOATS_PER_VERTEX);
}

#[test]
fn test_indices_reference_valid_vertices() {
    assert_eq!(CUBE_INDICES.len(), CUBE_INDEX_COUNT);
    for &index in &CUBE_INDICES {
        assert!((index as usize) < CUBE_VERTEX_COUNT);
    }
}

#[test]
fn test_every_vertex_is_referenced() {
    for vertex in 0..CUBE_VERTEX_COUNT as u16 {
        assert!(
            CUBE_INDICES.contains(&vertex),
            "vertex {} unused by the index stream",
            vertex
        );
    }
}

#[test]
fn test_positions_scale_with_half_extent() {
    let vertices = cube_vertices(6.0);
    for vertex in vertices.chunks_exact(CUBE_FLOATS_PER_VERTEX) {
        // All position components sit on the cube surface
        assert_eq!(vertex[0].abs(), 6.0);
        assert_eq!(vertex[1].abs(), 6.0);
        assert_eq!(vertex[2].abs(), 6.0);
    }
}

#[test]
fn test_normals_are_unit_axis_vectors() {
    let vertices = cube_vertices(1.0);
    for vertex in vertices.chunks_exact(CUBE_FLOATS_PER_VERTEX) {
        let normal = &vertex[3..6];
        let length_sq: f32 = normal.iter().map(|c| c * c).sum();
        assert!((length_sq - 1.0).abs() < 1e-6);
    }
}

// ============================================================================
// INTEGRATION WITH THE BUFFER RESOURCE
// ============================================================================

#[test]
fn test_cube_uploads_and_draws() {
    let mut ctx = MockContext::new();
    let mut vbo = VertexBufferObject::new();

    vbo.upload_vertices(&mut ctx, &cube_vertices(6.0), UsageHint::Static)
        .unwrap();
    vbo.upload_indices(&mut ctx, &CUBE_INDICES, UsageHint::Static)
        .unwrap();

    vbo.add_attribute(
        &mut ctx,
        &VertexAttrib {
            slot: 0,
            component_count: 3,
            component_type: AttribType::F32,
            normalized: false,
            stride_bytes: CUBE_STRIDE_BYTES,
            offset_bytes: CUBE_POSITION_OFFSET,
        },
    )
    .unwrap();

    vbo.draw(
        &mut ctx,
        PrimitiveTopology::Triangles,
        CUBE_INDEX_COUNT as u32,
        IndexType::U16,
        0,
    )
    .unwrap();

    let vertex_alloc = ctx.live.get(&vbo.vertex_handle().0).unwrap();
    assert_eq!(vertex_alloc.size, CUBE_VERTEX_COUNT * 8 * 4);
    let index_alloc = ctx.live.get(&vbo.index_handle().0).unwrap();
    assert_eq!(index_alloc.size, CUBE_INDEX_COUNT * 2);
    assert!(ctx.poll_error().is_none());
    vbo.destroy(&mut ctx);
}
