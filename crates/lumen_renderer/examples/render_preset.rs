//! Render a built-in scene to a PPM file.
//!
//! Run with: cargo run --release --example render_preset -- [preset] [output.ppm]

use std::env;
use std::fs::File;
use std::io::BufWriter;

use lumen_core::{write_ppm, Preset};
use lumen_renderer::{build_world, Camera};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let preset = match args.get(1).map(|name| name.parse::<Preset>()) {
        None => Preset::Simple,
        Some(Ok(preset)) => preset,
        Some(Err(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let filename = args.get(2).map(String::as_str).unwrap_or("output.ppm");

    println!("Lumen Path Tracer - {} preset", preset);
    println!("=================================");

    let mut rng = StdRng::seed_from_u64(0);
    let scene = preset.build(&mut rng);

    let start = std::time::Instant::now();
    let world = build_world(&scene).expect("Preset scenes are valid");
    println!("Scene built in {:?}", start.elapsed());

    // Keep the example quick regardless of the preset's quality settings.
    let mut camera = Camera::from_settings(&scene.camera)
        .with_resolution(400, 16.0 / 9.0)
        .with_quality(16, 10);
    camera.setup();

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width(),
        camera.image_height(),
        camera.samples_per_pixel()
    );

    let start = std::time::Instant::now();
    let file = File::create(filename).expect("Failed to create output file");
    let pixels = camera.render(&world, &mut rng).expect("Camera is set up");
    write_ppm(
        BufWriter::new(file),
        camera.image_width(),
        camera.image_height(),
        pixels,
    )
    .expect("Failed to save image");

    println!("Rendered in {:?}", start.elapsed());
    println!("Saved to {}", filename);
}
