//! Closed-form diffuse shading math
//!
//! CPU-side versions of the diffuse terms the sample shaders evaluate per
//! fragment. Useful for baking, reference testing, and debug visualization.
//! All direction vectors are expected to be normalized.

use glam::Vec3;

/// Lambertian diffuse with a fixed 0.25 ambient lift
pub fn lambert_diffuse(
    dir_to_light: Vec3,
    surface_normal: Vec3,
    light_color: Vec3,
    albedo: Vec3,
) -> Vec3 {
    let diffuse_amount = dir_to_light.dot(surface_normal).clamp(0.0, 1.0);
    (diffuse_amount + 0.25) * light_color * albedo
}

/// Oren-Nayar rough diffuse with the same 0.25 ambient lift
///
/// `roughness` is the surface roughness sigma; zero degenerates to the
/// Lambertian term.
pub fn oren_nayar_diffuse(
    dir_to_light: Vec3,
    dir_to_eye: Vec3,
    surface_normal: Vec3,
    light_color: Vec3,
    albedo: Vec3,
    roughness: f32,
) -> Vec3 {
    let l_dot_n = dir_to_light.dot(surface_normal);
    let v_dot_n = dir_to_eye.dot(surface_normal);

    let theta_i = l_dot_n.abs().acos();
    let theta_r = v_dot_n.abs().acos();

    let (alpha, beta) = if theta_i > theta_r {
        (theta_i, theta_r)
    } else {
        (theta_r, theta_i)
    };

    // Light and eye directions projected into the surface plane
    let proj_light =
        (dir_to_light - surface_normal * l_dot_n.clamp(0.0, 1.0)).normalize_or_zero();
    let proj_eye =
        (dir_to_eye - surface_normal * v_dot_n.clamp(0.0, 1.0)).normalize_or_zero();

    let gamma = proj_eye.dot(proj_light);
    let rough_sq = roughness * roughness;

    let a = 1.0 - 0.5 * (rough_sq / (rough_sq + 0.57));
    let b = 0.45 * (rough_sq / (rough_sq + 0.09));
    let c = alpha.sin().clamp(0.0, 1.0) * beta.tan().max(0.0);

    let rough_term = a + b * gamma.max(0.0) * c;

    light_color * albedo * rough_term * (l_dot_n.clamp(0.0, 1.0) + 0.25)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
