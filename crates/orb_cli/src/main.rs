//! Command-line front end for the ORB renderer.
//!
//! Builds the example scene, renders it, and hands the frame buffer to the
//! PNG sink.

mod sink;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use orb_renderer::{
    render, render_parallel, Camera, Lambert, Light, Material, Scene, Sphere, Surface, Vec3,
};

/// orb, an offline sphere ray tracer
#[derive(Parser, Debug)]
#[command(name = "orb", version, about = "Render a sphere scene to a PNG image")]
struct Cli {
    /// Output image width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 1024)]
    height: u32,

    /// Output file path
    #[arg(short, long, default_value = "result.png")]
    output: PathBuf,

    /// Render rows in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene = Scene::new();
    populate_scene(&mut scene);
    log::info!(
        "scene: {} surfaces, {} lights",
        scene.surface_count(),
        scene.light_count()
    );

    let mut camera = Camera::new()
        .with_resolution(cli.width, cli.height)
        .with_position(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
    camera.initialize();

    let start = Instant::now();
    let image = if cli.parallel {
        render_parallel(&camera, &scene)
    } else {
        render(&camera, &scene)
    };
    log::info!(
        "rendered {}x{} in {:?}",
        cli.width,
        cli.height,
        start.elapsed()
    );

    sink::save_png(&image, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!("saved {}", cli.output.display());

    Ok(())
}

/// The example scene: four Lambert spheres under a single white light.
fn populate_scene(scene: &mut Scene) {
    scene.add_surface(Surface::Sphere(Sphere::new(
        1.0,
        Vec3::new(0.0, 0.0, 8.0),
        Material::Lambert(Lambert::new(Vec3::new(1.0, 0.0, 0.0))),
    )));
    scene.add_surface(Surface::Sphere(Sphere::new(
        0.3,
        Vec3::new(2.0, 1.5, 4.0),
        Material::Lambert(Lambert::new(Vec3::new(0.0, 1.0, 0.0))),
    )));
    scene.add_surface(Surface::Sphere(Sphere::new(
        0.9,
        Vec3::new(0.0, -1.0, 5.0),
        Material::Lambert(Lambert::new(Vec3::new(0.0, 0.0, 1.0))),
    )));
    scene.add_surface(Surface::Sphere(Sphere::new(
        0.5,
        Vec3::new(-2.0, -2.0, 5.0),
        Material::Lambert(Lambert::new(Vec3::new(1.0, 1.0, 1.0))),
    )));

    scene.add_light(Light::new(
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, 10.0, 0.0),
    ));
}
