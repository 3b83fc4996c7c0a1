//! Conversion from scene descriptions to renderable geometry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Dielectric, HittableList, Lambertian, Material, Metal, RenderResult, Sphere};
use lumen_core::{MaterialDesc, SceneDescription};

/// Instantiate a material from its description.
pub fn material_from_desc(desc: &MaterialDesc) -> Arc<dyn Material> {
    match *desc {
        MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDesc::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
        MaterialDesc::Dielectric {
            index_of_refraction,
        } => Arc::new(Dielectric::new(index_of_refraction)),
    }
}

/// Build the hittable world for a scene.
///
/// The scene is validated first. Each named material is instantiated once
/// and shared by every sphere that refers to it.
pub fn build_world(scene: &SceneDescription) -> RenderResult<HittableList> {
    scene.validate()?;

    let materials: HashMap<&str, Arc<dyn Material>> = scene
        .materials
        .iter()
        .map(|(name, desc)| (name.as_str(), material_from_desc(desc)))
        .collect();

    let mut world = HittableList::new();
    for sphere in &scene.spheres {
        // validate() guarantees every reference resolves
        if let Some(material) = materials.get(sphere.material.as_str()) {
            world.add(Box::new(Sphere::new(
                sphere.center,
                sphere.radius,
                Arc::clone(material),
            )));
        }
    }

    log::info!(
        "Built world: {} spheres, {} materials",
        world.len(),
        materials.len()
    );

    Ok(world)
}
