// Vector utilities for light transport
//
// Extends glam::Vec3 with the few operations glam does not provide in the
// form the scattering code needs.

use glam::Vec3;

/// Components below this magnitude count as zero.
const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Extension trait for Vec3
pub trait VecExt {
    /// True if every component's magnitude is below 1e-8.
    fn near_zero(&self) -> bool;
}

impl VecExt for Vec3 {
    fn near_zero(&self) -> bool {
        self.abs().max_element() < NEAR_ZERO_EPSILON
    }
}

/// Mirror `v` about the plane with unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with unit normal `n`.
///
/// `etai_over_etat` is the ratio of refractive indices (incident over
/// transmitted). The caller handles total internal reflection.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
