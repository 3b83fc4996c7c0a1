//! Built-in scenes.

use std::fmt;
use std::str::FromStr;

use lumen_math::{gen_f32, gen_range_f32, random_vec3, random_vec3_range, Color, Point3};
use rand::RngCore;

use crate::scene::{CameraSettings, MaterialDesc, SceneDescription};

/// A scene shipped with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// One diffuse sphere resting on a large ground sphere.
    Simple,
    /// Diffuse, hollow glass and fuzzy metal spheres side by side, with
    /// depth of field.
    ThreeSpheres,
    /// A field of small random spheres around three large ones.
    Final,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Simple, Preset::ThreeSpheres, Preset::Final];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Simple => "simple",
            Preset::ThreeSpheres => "three-spheres",
            Preset::Final => "final",
        }
    }

    /// Build the scene. Only `Final` draws from `rng`.
    pub fn build(&self, rng: &mut dyn RngCore) -> SceneDescription {
        match self {
            Preset::Simple => simple(),
            Preset::ThreeSpheres => three_spheres(),
            Preset::Final => final_scene(rng),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| format!("unknown preset '{}'", s))
    }
}

fn simple() -> SceneDescription {
    let mut scene = SceneDescription::new(CameraSettings::default());

    scene.add_material("ground", MaterialDesc::lambertian(Color::new(0.8, 0.8, 0.0)));
    scene.add_material("center", MaterialDesc::lambertian(Color::new(0.1, 0.2, 0.5)));

    scene.add_sphere(Point3::new(0.0, 0.0, -1.0), 0.5, "center");
    scene.add_sphere(Point3::new(0.0, -100.5, -1.0), 100.0, "ground");

    scene
}

fn three_spheres() -> SceneDescription {
    let camera = CameraSettings {
        vfov: 20.0,
        look_from: Point3::new(-2.0, 2.0, 1.0),
        look_at: Point3::new(0.0, 0.0, -1.0),
        defocus_angle: 10.0,
        focus_dist: 3.4,
        samples_per_pixel: 100,
        max_depth: 50,
        ..Default::default()
    };
    let mut scene = SceneDescription::new(camera);

    scene.add_material("ground", MaterialDesc::lambertian(Color::new(0.8, 0.8, 0.0)));
    scene.add_material("center", MaterialDesc::lambertian(Color::new(0.1, 0.2, 0.5)));
    scene.add_material("glass", MaterialDesc::dielectric(1.5));
    scene.add_material("bubble", MaterialDesc::dielectric(1.0 / 1.5));
    scene.add_material("gold", MaterialDesc::metal(Color::new(0.8, 0.6, 0.2), 1.0));

    scene.add_sphere(Point3::new(0.0, -100.5, -1.0), 100.0, "ground");
    scene.add_sphere(Point3::new(0.0, 0.0, -1.2), 0.5, "center");
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), 0.5, "glass");
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), 0.4, "bubble");
    scene.add_sphere(Point3::new(1.0, 0.0, -1.0), 0.5, "gold");

    scene
}

fn final_scene(rng: &mut dyn RngCore) -> SceneDescription {
    let camera = CameraSettings {
        image_width: 1200,
        vfov: 20.0,
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::ZERO,
        defocus_angle: 0.6,
        focus_dist: 10.0,
        samples_per_pixel: 100,
        max_depth: 50,
        ..Default::default()
    };
    let mut scene = SceneDescription::new(camera);

    scene.add_material("ground", MaterialDesc::lambertian(Color::splat(0.5)));
    scene.add_sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, "ground");

    // Every small glass sphere shares one material.
    scene.add_material("glass", MaterialDesc::dielectric(1.5));

    let keep_clear = Point3::new(4.0, 0.2, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Point3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                let name = format!("diffuse_{}_{}", a, b);
                let albedo = random_vec3(rng) * random_vec3(rng);
                scene.add_material(name.as_str(), MaterialDesc::lambertian(albedo));
                scene.add_sphere(center, 0.2, name);
            } else if choose_mat < 0.95 {
                let name = format!("metal_{}_{}", a, b);
                let albedo = random_vec3_range(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                scene.add_material(name.as_str(), MaterialDesc::metal(albedo, fuzz));
                scene.add_sphere(center, 0.2, name);
            } else {
                scene.add_sphere(center, 0.2, "glass");
            }
        }
    }

    scene.add_material("brown", MaterialDesc::lambertian(Color::new(0.4, 0.2, 0.1)));
    scene.add_material("mirror", MaterialDesc::metal(Color::new(0.7, 0.6, 0.5), 0.0));

    scene.add_sphere(Point3::new(0.0, 1.0, 0.0), 1.0, "glass");
    scene.add_sphere(Point3::new(-4.0, 1.0, 0.0), 1.0, "brown");
    scene.add_sphere(Point3::new(4.0, 1.0, 0.0), 1.0, "mirror");

    scene
}
