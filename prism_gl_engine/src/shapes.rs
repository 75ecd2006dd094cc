//! Canned geometry for feeding buffer resources
//!
//! An axis-aligned cube with interleaved position/normal/texcoord vertices,
//! four vertices per face and two triangles per face. The layout constants
//! describe the interleaving for attribute setup.

/// Floats per cube vertex: position (3) + normal (3) + texcoord (2)
pub const CUBE_FLOATS_PER_VERTEX: usize = 8;

/// Byte stride between consecutive cube vertices
pub const CUBE_STRIDE_BYTES: u32 = (CUBE_FLOATS_PER_VERTEX * 4) as u32;

/// Byte offset of the position components
pub const CUBE_POSITION_OFFSET: usize = 0;

/// Byte offset of the normal components
pub const CUBE_NORMAL_OFFSET: usize = 3 * 4;

/// Byte offset of the texcoord components
pub const CUBE_TEXCOORD_OFFSET: usize = 6 * 4;

/// Number of cube vertices (4 per face)
pub const CUBE_VERTEX_COUNT: usize = 24;

/// Number of cube indices (2 triangles per face)
pub const CUBE_INDEX_COUNT: usize = 36;

/// Cube index stream, four vertices per face assembled into two triangles
pub const CUBE_INDICES: [u16; CUBE_INDEX_COUNT] = [
    0, 1, 3, 3, 1, 2, // front
    4, 7, 5, 7, 6, 5, // back
    8, 9, 11, 11, 9, 10, // top
    12, 15, 13, 15, 14, 13, // bottom
    16, 17, 19, 19, 17, 18, // left
    20, 23, 21, 23, 22, 21, // right
];

/// Interleaved cube vertex stream scaled to `half_extent`
///
/// Each face has its own four vertices so normals stay flat per face; uv
/// coordinates cover the full texture on every face with a flipped v axis.
pub fn cube_vertices(half_extent: f32) -> Vec<f32> {
    let s = half_extent;
    // (position, normal, uv) per corner, four corners per face
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // front (+z)
        ([0.0, 0.0, 1.0], [[-s, -s, s], [s, -s, s], [s, s, s], [-s, s, s]]),
        // back (-z)
        ([0.0, 0.0, -1.0], [[-s, -s, -s], [s, -s, -s], [s, s, -s], [-s, s, -s]]),
        // top (+y)
        ([0.0, 1.0, 0.0], [[-s, s, s], [s, s, s], [s, s, -s], [-s, s, -s]]),
        // bottom (-y)
        ([0.0, -1.0, 0.0], [[-s, -s, s], [s, -s, s], [s, -s, -s], [-s, -s, -s]]),
        // left (-x)
        ([-1.0, 0.0, 0.0], [[-s, -s, -s], [-s, -s, s], [-s, s, s], [-s, s, -s]]),
        // right (+x)
        ([1.0, 0.0, 0.0], [[s, -s, -s], [s, -s, s], [s, s, s], [s, s, -s]]),
    ];
    // v axis flipped: corner order min/min, max/min, max/max, min/max
    const UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT * CUBE_FLOATS_PER_VERTEX);
    for (normal, corners) in &faces {
        for (corner, uv) in corners.iter().zip(UVS.iter()) {
            vertices.extend_from_slice(corner);
            vertices.extend_from_slice(normal);
            vertices.extend_from_slice(uv);
        }
    }
    vertices
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "shapes_tests.rs"]
mod tests;
