//! sRGB color-space conversion utilities
//!
//! Piecewise conversions between linear light and the sRGB transfer
//! function. The gamma segment boundaries (0.0031308 linear, 0.04045
//! encoded) and coefficients follow the sRGB specification.

use glam::Vec3;

/// Encode a linear color component as sRGB
///
/// Saturates to [0, 1]. NaN maps to 0, since every comparison against NaN
/// fails and the input falls through to the final branch.
pub fn linear_to_srgb(cl: f32) -> f32 {
    if cl > 1.0 {
        1.0
    } else if cl > 0.0 {
        if cl < 0.0031308 {
            12.92 * cl
        } else {
            1.055 * cl.powf(0.41666) - 0.055
        }
    } else {
        0.0
    }
}

/// Encode a linear color component as an 8-bit sRGB value
///
/// Rounds to nearest after scaling to [0, 255].
pub fn linear_to_srgb_u8(cl: f32) -> u8 {
    (linear_to_srgb(cl) * 255.0 + 0.5).floor() as u8
}

/// Decode an sRGB-encoded component back to linear light
pub fn srgb_to_linear(cs: f32) -> f32 {
    if cs <= 0.04045 {
        cs / 12.92
    } else {
        ((cs + 0.055) / 1.055).powf(2.4)
    }
}

/// Component-wise [`linear_to_srgb`] over an RGB triple
pub fn linear_to_srgb_vec3(c: Vec3) -> Vec3 {
    Vec3::new(
        linear_to_srgb(c.x),
        linear_to_srgb(c.y),
        linear_to_srgb(c.z),
    )
}

/// Component-wise [`srgb_to_linear`] over an RGB triple
pub fn srgb_to_linear_vec3(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_to_linear(c.x),
        srgb_to_linear(c.y),
        srgb_to_linear(c.z),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
