//! Random sampling helpers.
//!
//! Every function takes the generator explicitly so a seeded `StdRng`
//! reproduces a render exactly.

use glam::Vec3;
use rand::{Rng, RngCore};

/// Uniform draw in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform draw in `[min, max)`.
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Vector with each component uniform in `[0, 1)`.
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// Vector with each component uniform in `[min, max)`.
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
    )
}

/// Rejection-sample a point strictly inside the unit ball.
///
/// About half of the candidate cube lies inside the ball, so the loop has
/// no iteration cap.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Rejection-sample a point strictly inside the unit disk in the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random direction on the unit sphere (ball sample, then normalized).
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        // The origin itself cannot be normalized.
        let p = random_in_unit_sphere(rng);
        if p.length_squared() > 1e-12 {
            return p.normalize();
        }
    }
}

/// Random unit vector in the hemisphere around `normal`.
pub fn random_on_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector(rng);
    if on_unit_sphere.dot(normal) > 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}
