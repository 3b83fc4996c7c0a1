//! End-to-end rendering through the public API.

use lumen_core::{write_ppm, Preset};
use lumen_renderer::{
    build_world, color_to_rgb, sky_gradient, Camera, HittableList, RenderError, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn simple_camera(samples: u32, depth: u32) -> Camera {
    let scene = Preset::Simple.build(&mut StdRng::seed_from_u64(0));
    let mut camera = Camera::from_settings(&scene.camera)
        .with_resolution(400, 16.0 / 9.0)
        .with_quality(samples, depth);
    camera.setup();
    camera
}

#[test]
fn seeded_render_is_reproducible() {
    let scene = Preset::Simple.build(&mut StdRng::seed_from_u64(0));
    let world = build_world(&scene).unwrap();
    let camera = simple_camera(1, 1);

    let first: Vec<[u8; 3]> = camera
        .render(&world, &mut StdRng::seed_from_u64(42))
        .unwrap()
        .take(400)
        .collect();
    let second: Vec<[u8; 3]> = camera
        .render(&world, &mut StdRng::seed_from_u64(42))
        .unwrap()
        .take(400)
        .collect();

    assert_eq!(first, second);

    // The top-left corner looks past both spheres into the sky.
    let mut replay = StdRng::seed_from_u64(42);
    let ray = camera.get_ray(0, 0, &mut replay).unwrap();
    assert_eq!(first[0], color_to_rgb(sky_gradient(&ray), 1));
}

#[test]
fn render_yields_one_pixel_per_position() {
    let scene = Preset::Simple.build(&mut StdRng::seed_from_u64(0));
    let world = build_world(&scene).unwrap();
    let camera = simple_camera(1, 2);

    assert_eq!(camera.image_height(), 225);
    let mut rng = StdRng::seed_from_u64(5);
    let pixels = camera.render(&world, &mut rng).unwrap();
    assert_eq!(pixels.len(), 400 * 225);
    assert_eq!(pixels.count(), camera.pixel_count());
}

#[test]
fn zero_depth_renders_black() {
    let scene = Preset::ThreeSpheres.build(&mut StdRng::seed_from_u64(0));
    let world = build_world(&scene).unwrap();
    let mut camera = Camera::from_settings(&scene.camera)
        .with_resolution(32, 2.0)
        .with_quality(4, 0);
    camera.setup();

    let mut rng = StdRng::seed_from_u64(3);
    let pixels = camera.render(&world, &mut rng).unwrap();
    assert!(pixels.into_iter().all(|rgb| rgb == [0, 0, 0]));
}

#[test]
fn empty_world_shows_sky_gradient() {
    let world = HittableList::new();
    let mut camera = Camera::new()
        .with_resolution(20, 2.0)
        .with_quality(1, 5)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(90.0, 0.0, 1.0);
    camera.setup();

    let seed = 11;
    let center = camera.image_width() / 2;
    let rendered = camera
        .render(&world, &mut StdRng::seed_from_u64(seed))
        .unwrap()
        .nth(center as usize)
        .unwrap();

    // A pinhole camera draws two values per ray and an empty world draws
    // none, so replaying get_ray along the top row reproduces the stream.
    let mut replay = StdRng::seed_from_u64(seed);
    let mut ray = camera.get_ray(0, 0, &mut replay).unwrap();
    for i in 1..=center {
        ray = camera.get_ray(i, 0, &mut replay).unwrap();
    }

    // White-to-blue lerp on the height of the unit direction.
    let unit = ray.direction().normalize();
    let a = 0.5 * (unit.y + 1.0);
    let expected = (1.0 - a) * Vec3::ONE + a * Vec3::new(0.5, 0.7, 1.0);

    // Upper half of the frame, so the lerp leans toward blue.
    assert!(a > 0.5);
    assert_eq!(rendered, color_to_rgb(expected, 1));
}

#[test]
fn unconfigured_camera_reports_error() {
    let world = HittableList::new();
    let mut rng = StdRng::seed_from_u64(0);

    let camera = simple_camera(1, 1).with_lens(40.0, 0.0, 2.0);
    assert!(matches!(
        camera.render(&world, &mut rng),
        Err(RenderError::NotSetUp)
    ));
}

#[test]
fn pixels_stream_into_ppm() {
    let scene = Preset::Simple.build(&mut StdRng::seed_from_u64(0));
    let world = build_world(&scene).unwrap();
    let mut camera = Camera::from_settings(&scene.camera)
        .with_resolution(8, 2.0)
        .with_quality(2, 3);
    camera.setup();

    let mut rng = StdRng::seed_from_u64(9);
    let mut buffer = Vec::new();
    write_ppm(
        &mut buffer,
        camera.image_width(),
        camera.image_height(),
        camera.render(&world, &mut rng).unwrap(),
    )
    .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("8 4"));
    assert_eq!(lines.next(), Some("255"));
    assert_eq!(lines.count(), 32);
}
