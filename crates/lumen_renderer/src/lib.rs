//! Lumen Renderer - CPU Path Tracing
//!
//! A single-threaded Monte Carlo path tracer: spheres, three scattering
//! materials, a thin-lens camera and a sky-gradient background.
//!
//! Typical use:
//!
//! ```ignore
//! let world = build_world(&scene)?;
//! let mut camera = Camera::from_settings(&scene.camera);
//! camera.setup();
//! for rgb in camera.render(&world, &mut rng)? {
//!     // stream to an encoder
//! }
//! ```

mod camera;
mod error;
mod hittable;
mod material;
mod renderer;
mod sphere;
mod world;

pub use camera::{Camera, Pixels};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{color_to_rgb, linear_to_gamma, ray_color, sky_gradient, HIT_EPSILON};
pub use sphere::Sphere;
pub use world::{build_world, material_from_desc};

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
