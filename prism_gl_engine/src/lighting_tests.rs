//! Unit tests for diffuse shading math

use crate::lighting::{lambert_diffuse, oren_nayar_diffuse};
use glam::Vec3;

const EPS: f32 = 1e-5;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

// ============================================================================
// LAMBERT TESTS
// ============================================================================

#[test]
fn test_lambert_head_on() {
    let normal = Vec3::Z;
    let result = lambert_diffuse(Vec3::Z, normal, Vec3::ONE, Vec3::ONE);
    // Full diffuse plus the 0.25 ambient lift
    assert!(approx(result, Vec3::splat(1.25)));
}

#[test]
fn test_lambert_below_horizon_keeps_ambient() {
    let normal = Vec3::Z;
    let result = lambert_diffuse(-Vec3::Z, normal, Vec3::ONE, Vec3::ONE);
    assert!(approx(result, Vec3::splat(0.25)));
}

#[test]
fn test_lambert_grazing_angle() {
    let normal = Vec3::Z;
    let dir = Vec3::new(1.0, 0.0, 1.0).normalize();
    let result = lambert_diffuse(dir, normal, Vec3::ONE, Vec3::ONE);
    let expected = dir.z + 0.25;
    assert!((result.x - expected).abs() < EPS);
}

#[test]
fn test_lambert_modulates_by_light_and_albedo() {
    let normal = Vec3::Z;
    let light = Vec3::new(1.0, 0.5, 0.0);
    let albedo = Vec3::new(0.2, 0.4, 0.8);
    let result = lambert_diffuse(Vec3::Z, normal, light, albedo);
    assert!(approx(result, 1.25 * light * albedo));
}

// ============================================================================
// OREN-NAYAR TESTS
// ============================================================================

#[test]
fn test_oren_nayar_zero_roughness_matches_lambert() {
    let normal = Vec3::Z;
    let to_light = Vec3::new(0.3, 0.2, 1.0).normalize();
    let to_eye = Vec3::new(-0.4, 0.1, 1.0).normalize();
    let light = Vec3::new(0.9, 0.8, 0.7);
    let albedo = Vec3::new(0.5, 0.5, 0.5);

    let on = oren_nayar_diffuse(to_light, to_eye, normal, light, albedo, 0.0);
    let lambert = lambert_diffuse(to_light, normal, light, albedo);
    assert!(approx(on, lambert));
}

#[test]
fn test_oren_nayar_roughness_darkens_head_on() {
    let normal = Vec3::Z;
    let smooth = oren_nayar_diffuse(Vec3::Z, Vec3::Z, normal, Vec3::ONE, Vec3::ONE, 0.0);
    let rough = oren_nayar_diffuse(Vec3::Z, Vec3::Z, normal, Vec3::ONE, Vec3::ONE, 0.8);
    // Head-on there is no backscatter boost, only the A-term attenuation
    assert!(rough.x < smooth.x);
}

#[test]
fn test_oren_nayar_retroreflection_boost() {
    // Rough surfaces brighten when eye and light directions align at an
    // oblique angle (the flat-full-moon effect)
    let normal = Vec3::Z;
    let oblique = Vec3::new(1.0, 0.0, 0.6).normalize();
    let opposed = Vec3::new(-1.0, 0.0, 0.6).normalize();

    let aligned =
        oren_nayar_diffuse(oblique, oblique, normal, Vec3::ONE, Vec3::ONE, 0.6);
    let crossed =
        oren_nayar_diffuse(oblique, opposed, normal, Vec3::ONE, Vec3::ONE, 0.6);
    assert!(aligned.x > crossed.x);
}

#[test]
fn test_oren_nayar_below_horizon_keeps_ambient() {
    let normal = Vec3::Z;
    let result =
        oren_nayar_diffuse(-Vec3::Z, Vec3::Z, normal, Vec3::ONE, Vec3::ONE, 0.5);
    // clamp(LdotN) is zero, so only the scaled 0.25 ambient term survives
    assert!(result.x > 0.0);
    assert!(result.x <= 0.25 + EPS);
}
