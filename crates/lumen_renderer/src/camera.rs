//! Camera for ray generation and image rendering.

use std::iter::FusedIterator;

use crate::{color_to_rgb, ray_color, Hittable, RenderError, RenderResult};
use lumen_core::CameraSettings;
use lumen_math::{gen_f32, random_in_unit_disk, Color, Point3, Ray, Vec3};
use rand::RngCore;

/// A thin-lens camera.
///
/// Configure it with the `with_*` builders, call [`Camera::setup`], then
/// [`Camera::render`]. Every builder discards the derived geometry, so
/// `setup()` has to run again after any configuration change.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    image_width: u32,
    aspect_ratio: f32,
    samples_per_pixel: u32,
    max_depth: u32,

    // Camera positioning
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,

    // Lens settings
    vfov: f32,          // Vertical field of view in degrees
    defocus_angle: f32, // Variation angle of rays through each pixel
    focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Derived by setup(); None until then
    view: Option<Viewport>,
}

/// Geometry derived from the camera configuration.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    image_height: u32,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    /// Defocus disk basis vectors, absent for a pinhole camera
    defocus_disk: Option<(Vec3, Vec3)>,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    /// Create an unconfigured camera from scene-file settings.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            image_width: settings.image_width,
            aspect_ratio: settings.aspect_ratio,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            look_from: settings.look_from,
            look_at: settings.look_at,
            vup: settings.vup,
            vfov: settings.vfov,
            defocus_angle: settings.defocus_angle,
            focus_dist: settings.focus_dist,
            view: None,
        }
    }

    /// Set image width and aspect ratio (width over height).
    pub fn with_resolution(mut self, image_width: u32, aspect_ratio: f32) -> Self {
        self.image_width = image_width;
        self.aspect_ratio = aspect_ratio;
        self.view = None;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self.view = None;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.view = None;
        self
    }

    /// Set lens settings. Angles are in degrees.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self.view = None;
        self
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Image height derived from width and aspect ratio, at least 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of pixels `render` yields.
    pub fn pixel_count(&self) -> usize {
        self.image_width as usize * self.image_height() as usize
    }

    /// True once `setup()` has run for the current configuration.
    pub fn is_ready(&self) -> bool {
        self.view.is_some()
    }

    /// Derive the viewport geometry (must be called before rendering).
    pub fn setup(&mut self) {
        let image_height = self.image_height();
        let center = self.look_from;

        // Calculate viewport dimensions
        let h = (self.vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width = viewport_height * (self.image_width as f32 / image_height as f32);

        // Calculate camera basis vectors
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        // Vectors across the viewport's horizontal edge and down its vertical edge
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        let pixel_delta_u = viewport_u / self.image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let viewport_upper_left = center - self.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_disk = (self.defocus_angle > 0.0).then(|| {
            let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
            (u * defocus_radius, v * defocus_radius)
        });

        log::debug!(
            "Camera setup: {}x{}, vfov {}°, defocus {}° at {}",
            self.image_width,
            image_height,
            self.vfov,
            self.defocus_angle,
            self.focus_dist
        );

        self.view = Some(Viewport {
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk,
        });
    }

    fn viewport(&self) -> RenderResult<&Viewport> {
        self.view.as_ref().ok_or(RenderError::NotSetUp)
    }

    /// Camera basis (u, v, w): right, up, and backwards from the view.
    pub fn basis(&self) -> RenderResult<(Vec3, Vec3, Vec3)> {
        let view = self.viewport()?;
        Ok((view.u, view.v, view.w))
    }

    /// Generate a jittered ray through pixel (i, j), with (0, 0) top-left.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> RenderResult<Ray> {
        Ok(self.viewport()?.get_ray(i, j, rng))
    }

    /// Average of `samples_per_pixel` radiance estimates for pixel (i, j).
    pub fn render_pixel(
        &self,
        i: u32,
        j: u32,
        world: &dyn Hittable,
        rng: &mut dyn RngCore,
    ) -> RenderResult<Color> {
        let view = self.viewport()?;
        Ok(self.sample_pixel(view, i, j, world, rng) / self.samples_per_pixel.max(1) as f32)
    }

    /// Render the image as a lazy stream of 8-bit RGB pixels.
    ///
    /// Pixels come in row-major order, top row first, left to right.
    pub fn render<'a>(
        &'a self,
        world: &'a dyn Hittable,
        rng: &'a mut dyn RngCore,
    ) -> RenderResult<Pixels<'a>> {
        let view = self.viewport()?;

        log::info!(
            "Rendering {}x{} @ {} spp, max depth {}",
            self.image_width,
            view.image_height,
            self.samples_per_pixel,
            self.max_depth
        );

        Ok(Pixels {
            camera: self,
            view,
            world,
            rng,
            next: 0,
            total: self.image_width as usize * view.image_height as usize,
        })
    }

    /// Sum (not average) of the pixel's radiance samples.
    fn sample_pixel(
        &self,
        view: &Viewport,
        i: u32,
        j: u32,
        world: &dyn Hittable,
        rng: &mut dyn RngCore,
    ) -> Color {
        let mut pixel_color = Color::ZERO;
        for _ in 0..self.samples_per_pixel {
            let ray = view.get_ray(i, j, rng);
            pixel_color += ray_color(&ray, self.max_depth, world, rng);
        }
        pixel_color
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + (i as f32 + offset.x) * self.pixel_delta_u
            + (j as f32 + offset.y) * self.pixel_delta_v;

        let ray_origin = match self.defocus_disk {
            None => self.center,
            Some((disk_u, disk_v)) => {
                let p = random_in_unit_disk(rng);
                self.center + p.x * disk_u + p.y * disk_v
            }
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }
}

/// Sample a random point in the square [-0.5, 0.5] x [-0.5, 0.5].
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}

/// Lazily rendered pixels, produced by [`Camera::render`].
///
/// Each call to `next` traces every sample for one pixel.
pub struct Pixels<'a> {
    camera: &'a Camera,
    view: &'a Viewport,
    world: &'a dyn Hittable,
    rng: &'a mut dyn RngCore,
    next: usize,
    total: usize,
}

impl Pixels<'_> {
    /// Coordinates (i, j) of the pixel the next call to `next` yields.
    pub fn pixel_coords(&self) -> (u32, u32) {
        let width = self.camera.image_width.max(1) as usize;
        ((self.next % width) as u32, (self.next / width) as u32)
    }
}

impl Iterator for Pixels<'_> {
    type Item = [u8; 3];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }

        let (i, j) = self.pixel_coords();
        if i == 0 {
            log::debug!("Scanline {}/{}", j + 1, self.view.image_height);
        }

        let sum = self
            .camera
            .sample_pixel(self.view, i, j, self.world, &mut *self.rng);
        self.next += 1;

        if self.next == self.total {
            log::info!("Render finished: {} pixels", self.total);
        }

        Some(color_to_rgb(sum, self.camera.samples_per_pixel))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels<'_> {}

impl FusedIterator for Pixels<'_> {}
