//! Lumen Core - Scene description and image output.
//!
//! This crate provides:
//!
//! - **Scene description**: `SceneDescription`, `CameraSettings`,
//!   `MaterialDesc`, `SphereDesc`, loadable from JSON
//! - **Presets**: the built-in scenes shipped with the `lumen` binary
//! - **Output**: streaming `P3` PPM encoding and PNG export
//!
//! The description is renderer-agnostic; `lumen_renderer` turns it into
//! hittable geometry.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{SceneDescription, Preset};
//!
//! let scene = SceneDescription::load("scene.json")?;
//! println!("{} spheres, {} materials",
//!     scene.sphere_count(),
//!     scene.material_count());
//! ```

pub mod output;
pub mod preset;
pub mod scene;

// Re-export commonly used types
pub use output::{save, write_ppm, OutputError, OutputFormat, OutputResult};
pub use preset::Preset;
pub use scene::{
    CameraSettings, MaterialDesc, SceneDescription, SceneError, SceneResult, SphereDesc,
};
