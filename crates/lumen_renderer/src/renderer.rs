//! Core path tracing integrator.
//!
//! Implements Monte Carlo path tracing with:
//! - Bounded bounce depth
//! - Sky gradient background as the only light source
//! - Gamma correction and 8-bit quantization

use crate::{Hittable, ScatterResult};
use lumen_math::{Color, Interval, Ray};
use rand::RngCore;

/// Hits closer than this are ignored so a scattered ray does not
/// re-intersect the surface it leaves from.
pub const HIT_EPSILON: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// Follows the ray through at most `depth` bounces, multiplying the
/// attenuation of every surface it scatters from. A miss returns the
/// accumulated attenuation times the sky; absorption or running out of
/// bounces returns black.
pub fn ray_color(ray: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    let mut throughput = Color::ONE;
    let mut ray = *ray;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::new(HIT_EPSILON, f32::INFINITY)) else {
            return throughput * sky_gradient(&ray);
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Some(ScatterResult {
                attenuation,
                scattered,
            }) => {
                throughput *= attenuation;
                ray = scattered;
            }
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Vertical white-to-blue gradient seen by rays that escape the scene.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::ONE + a * Color::new(0.5, 0.7, 1.0)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a sum of `samples` linear radiance samples to 8-bit RGB.
///
/// Averages, gamma-corrects, clamps each channel to `[0, 0.999]` and scales
/// by 255 with truncation.
pub fn color_to_rgb(sum: Color, samples: u32) -> [u8; 3] {
    let scale = 1.0 / samples.max(1) as f32;
    let intensity = Interval::new(0.0, 0.999);
    let channel = |linear: f32| (255.0 * intensity.clamp(linear_to_gamma(linear * scale))) as u8;

    [channel(sum.x), channel(sum.y), channel(sum.z)]
}
