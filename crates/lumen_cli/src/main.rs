use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{OutputFormat, Preset, SceneDescription};
use lumen_renderer::{build_world, Camera};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Render a sphere scene with the Lumen path tracer.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
struct Args {
    /// Output image; the extension picks the format (.ppm or .png)
    output: PathBuf,

    /// JSON scene description to render instead of a preset
    #[arg(long, value_name = "FILE", conflicts_with = "preset")]
    scene: Option<PathBuf>,

    /// Built-in scene: simple, three-spheres or final
    #[arg(long, default_value_t = Preset::ThreeSpheres)]
    preset: Preset,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Samples per pixel
    #[arg(long)]
    samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    max_depth: Option<u32>,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Load or build the scene and apply the camera overrides.
    fn scene(&self, rng: &mut StdRng) -> Result<SceneDescription> {
        let mut scene = match &self.scene {
            Some(path) => SceneDescription::load(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?,
            None => {
                log::info!("Using preset '{}'", self.preset);
                self.preset.build(rng)
            }
        };

        let camera = &mut scene.camera;
        if let Some(width) = self.width {
            camera.image_width = width;
        }
        if let Some(samples) = self.samples {
            camera.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            camera.max_depth = max_depth;
        }

        Ok(scene)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    // Reject unknown extensions before spending time on the render.
    OutputFormat::from_path(&args.output)
        .with_context(|| format!("Cannot write {}", args.output.display()))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let scene = args.scene(&mut rng)?;
    let world = build_world(&scene).context("Invalid scene")?;

    let mut camera = Camera::from_settings(&scene.camera);
    camera.setup();

    let width = camera.image_width();
    let height = camera.image_height();
    let start = Instant::now();

    let pixels = camera.render(&world, &mut rng)?;
    let pixels = pixels.enumerate().map(|(n, rgb)| {
        if n % width as usize == 0 {
            log::info!("Scanlines remaining: {}", height as usize - n / width as usize);
        }
        rgb
    });

    lumen_core::save(&args.output, width, height, pixels)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Wrote {} ({}x{}) in {:.2?}",
        args.output.display(),
        width,
        height,
        start.elapsed()
    );

    Ok(())
}
