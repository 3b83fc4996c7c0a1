//! Example: Load and inspect a scene file, or dump a preset as JSON.
//!
//! Run with: cargo run --example inspect_scene -- scene.json
//!       or: cargo run --example inspect_scene -- --preset three-spheres

use std::env;

use lumen_core::{MaterialDesc, Preset, SceneDescription};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <scene.json>");
        println!("       inspect_scene --preset <simple|three-spheres|final>");
        return;
    }

    if args[1] == "--preset" {
        let Some(preset) = args.get(2).and_then(|name| name.parse::<Preset>().ok()) else {
            println!("Unknown or missing preset name");
            return;
        };
        let scene = preset.build(&mut StdRng::seed_from_u64(0));
        match scene.to_json_string() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        }
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match SceneDescription::load(path) {
        Ok(scene) => {
            let camera = &scene.camera;
            println!("\n=== Camera ===");
            println!(
                "  {} px wide @ {:.3} aspect, vfov {}°",
                camera.image_width, camera.aspect_ratio, camera.vfov
            );
            println!(
                "  {} spp, depth {}, defocus {}° @ {}",
                camera.samples_per_pixel, camera.max_depth, camera.defocus_angle, camera.focus_dist
            );

            println!("\n--- Materials ({}) ---", scene.material_count());
            for (name, material) in &scene.materials {
                let users = scene.spheres.iter().filter(|s| &s.material == name).count();
                let kind = match material {
                    MaterialDesc::Lambertian { .. } => "lambertian",
                    MaterialDesc::Metal { .. } => "metal",
                    MaterialDesc::Dielectric { .. } => "dielectric",
                };
                println!("  {} ({}) used by {} spheres", name, kind, users);
            }

            println!("\n--- Spheres ({}) ---", scene.sphere_count());
            for (i, sphere) in scene.spheres.iter().enumerate().take(10) {
                println!(
                    "  [{}] center {:?} radius {} material {}",
                    i, sphere.center, sphere.radius, sphere.material
                );
            }
            if scene.sphere_count() > 10 {
                println!("  ... and {} more", scene.sphere_count() - 10);
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
