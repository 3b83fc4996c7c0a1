//! Scene description types for Lumen.
//!
//! A scene is a camera, a table of named materials and a list of spheres
//! that reference materials by name. Referencing by name lets many spheres
//! share a single material instance once the renderer builds the world.
//!
//! The JSON form mirrors the structs directly:
//!
//! ```json
//! {
//!   "camera": { "image_width": 400, "vfov": 90.0 },
//!   "materials": {
//!     "ground": { "type": "lambertian", "albedo": [0.8, 0.8, 0.0] },
//!     "glass": { "type": "dielectric", "index_of_refraction": 1.5 }
//!   },
//!   "spheres": [
//!     { "center": [0.0, -100.5, -1.0], "radius": 100.0, "material": "ground" },
//!     { "center": [0.0, 0.0, -1.0], "radius": 0.5, "material": "glass" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use lumen_math::{Color, Point3, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Sphere {index} has invalid radius {radius} (must be positive)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Camera configuration as it appears in a scene file.
///
/// Angles are in degrees. Every field has a default so a scene file only
/// needs to mention what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    /// Rendered image width in pixels
    pub image_width: u32,

    /// Width over height; image height is derived from it
    pub aspect_ratio: f32,

    /// Vertical field of view
    pub vfov: f32,

    /// Random samples accumulated per pixel
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per primary ray
    pub max_depth: u32,

    /// Camera position
    pub look_from: Point3,

    /// Point the camera looks at
    pub look_at: Point3,

    /// Camera-relative "up" direction
    pub vup: Vec3,

    /// Aperture cone angle through each pixel (0 = pinhole)
    pub defocus_angle: f32,

    /// Distance from the camera to the plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            vfov: 90.0,
            samples_per_pixel: 10,
            max_depth: 10,
            look_from: Point3::ZERO,
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

impl CameraSettings {
    /// Check that the settings describe a renderable camera.
    pub fn validate(&self) -> SceneResult<()> {
        let fail = |reason: &str| Err(SceneError::InvalidCamera(reason.to_string()));

        if self.image_width == 0 {
            return fail("image_width must be at least 1");
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return fail("aspect_ratio must be a positive number");
        }
        if self.samples_per_pixel == 0 {
            return fail("samples_per_pixel must be at least 1");
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return fail("vfov must be between 0 and 180 degrees");
        }
        if !self.focus_dist.is_finite() || self.focus_dist <= 0.0 {
            return fail("focus_dist must be a positive number");
        }
        if self.defocus_angle < 0.0 {
            return fail("defocus_angle must not be negative");
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 {
            return fail("look_from and look_at must differ");
        }
        if view.cross(self.vup).length_squared() == 0.0 {
            return fail("vup must not be parallel to the viewing direction");
        }

        Ok(())
    }
}

/// A surface material definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDesc {
    /// Ideal diffuse reflector
    Lambertian { albedo: Color },

    /// Specular reflector; `fuzz` 0 is a perfect mirror, 1 is very rough
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f32,
    },

    /// Clear refractive material such as glass or water
    Dielectric {
        #[serde(alias = "ior")]
        index_of_refraction: f32,
    },
}

impl MaterialDesc {
    pub fn lambertian(albedo: Color) -> Self {
        Self::Lambertian { albedo }
    }

    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Self::Metal { albedo, fuzz }
    }

    pub fn dielectric(index_of_refraction: f32) -> Self {
        Self::Dielectric {
            index_of_refraction,
        }
    }

    /// Check the material's parameters. `name` is only used for messages.
    pub fn validate(&self, name: &str) -> SceneResult<()> {
        match self {
            Self::Lambertian { .. } => {}
            Self::Metal { fuzz, .. } => {
                if !(0.0..=1.0).contains(fuzz) {
                    log::warn!("Material '{}' has fuzz {} outside [0, 1]; it will be clamped", name, fuzz);
                }
            }
            Self::Dielectric {
                index_of_refraction,
            } => {
                if !index_of_refraction.is_finite() || *index_of_refraction <= 0.0 {
                    return Err(SceneError::InvalidMaterial {
                        name: name.to_string(),
                        reason: format!(
                            "index_of_refraction must be positive, got {}",
                            index_of_refraction
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A sphere in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDesc {
    pub center: Point3,
    pub radius: f32,

    /// Name of an entry in `SceneDescription::materials`
    pub material: String,
}

/// A complete renderable scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDescription {
    pub camera: CameraSettings,
    pub materials: BTreeMap<String, MaterialDesc>,
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with the given camera.
    pub fn new(camera: CameraSettings) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;

        log::info!(
            "Loaded scene {}: {} spheres, {} materials",
            path.display(),
            scene.sphere_count(),
            scene.material_count()
        );

        Ok(scene)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add (or replace) a named material.
    pub fn add_material(&mut self, name: impl Into<String>, material: MaterialDesc) {
        self.materials.insert(name.into(), material);
    }

    /// Add a sphere referencing a material by name.
    pub fn add_sphere(&mut self, center: Point3, radius: f32, material: impl Into<String>) {
        self.spheres.push(SphereDesc {
            center,
            radius,
            material: material.into(),
        });
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Check the camera, every material, and every sphere.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;

        for (name, material) in &self.materials {
            material.validate(name)?;
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !self.materials.contains_key(&sphere.material) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: sphere.material.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_JSON: &str = r#"{
        "camera": { "image_width": 200, "vfov": 40.0 },
        "materials": {
            "ground": { "type": "lambertian", "albedo": [0.8, 0.8, 0.0] },
            "chrome": { "type": "metal", "albedo": [0.8, 0.8, 0.8] },
            "glass": { "type": "dielectric", "ior": 1.5 }
        },
        "spheres": [
            { "center": [0.0, -100.5, -1.0], "radius": 100.0, "material": "ground" },
            { "center": [-1.0, 0.0, -1.0], "radius": 0.5, "material": "glass" },
            { "center": [1.0, 0.0, -1.0], "radius": 0.5, "material": "chrome" }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = SceneDescription::from_json_str(SCENE_JSON).unwrap();

        assert_eq!(scene.sphere_count(), 3);
        assert_eq!(scene.material_count(), 3);
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, -100.5, -1.0));
        assert_eq!(scene.materials["glass"], MaterialDesc::dielectric(1.5));
        assert_eq!(
            scene.materials["chrome"],
            MaterialDesc::metal(Color::splat(0.8), 0.0)
        );
    }

    #[test]
    fn test_camera_defaults_fill_missing_fields() {
        let scene = SceneDescription::from_json_str(SCENE_JSON).unwrap();
        let defaults = CameraSettings::default();

        assert_eq!(scene.camera.image_width, 200);
        assert_eq!(scene.camera.vfov, 40.0);
        assert_eq!(scene.camera.aspect_ratio, defaults.aspect_ratio);
        assert_eq!(scene.camera.samples_per_pixel, defaults.samples_per_pixel);
        assert_eq!(scene.camera.look_at, defaults.look_at);
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let mut scene = SceneDescription::default();
        scene.add_material("red", MaterialDesc::lambertian(Color::X));
        scene.add_sphere(Point3::ZERO, 1.0, "red");
        scene.add_sphere(Point3::X, 1.0, "blue");

        match scene.validate() {
            Err(SceneError::UnknownMaterial { index, name }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "blue");
            }
            other => panic!("expected UnknownMaterial, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_radius_is_rejected() {
        let mut scene = SceneDescription::default();
        scene.add_material("red", MaterialDesc::lambertian(Color::X));
        scene.add_sphere(Point3::ZERO, 0.0, "red");

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidRadius { index: 0, .. })
        ));
    }

    #[test]
    fn test_bad_dielectric_is_rejected() {
        let mut scene = SceneDescription::default();
        scene.add_material("glass", MaterialDesc::dielectric(-1.5));

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidMaterial { .. })
        ));
    }

    #[test]
    fn test_camera_validation() {
        assert!(CameraSettings::default().validate().is_ok());

        let zero_width = CameraSettings {
            image_width: 0,
            ..Default::default()
        };
        assert!(matches!(zero_width.validate(), Err(SceneError::InvalidCamera(_))));

        let no_samples = CameraSettings {
            samples_per_pixel: 0,
            ..Default::default()
        };
        assert!(no_samples.validate().is_err());

        let looking_up = CameraSettings {
            look_at: Point3::new(0.0, 5.0, 0.0),
            ..Default::default()
        };
        assert!(looking_up.validate().is_err());
    }

    #[test]
    fn test_unknown_field_is_a_json_error() {
        let result = SceneDescription::from_json_str(r#"{ "spheres": [], "lights": [] }"#);
        assert!(matches!(result, Err(SceneError::Json(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let parsed = SceneDescription::from_json_str(SCENE_JSON).unwrap();
        let json = parsed.to_json_string().unwrap();
        let reparsed = SceneDescription::from_json_str(&json).unwrap();
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = SceneDescription::load("/nonexistent/lumen/scene.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
