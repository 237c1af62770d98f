//! Core render loop: nearest-hit traversal and frame assembly.

use crate::{Camera, FrameBuffer, Rgb, Scene};
use orb_math::Vec3;
use rayon::prelude::*;

/// Compute the color seen along a single ray.
///
/// Walks every surface in insertion order and keeps the nearest hit (strict
/// `<`, so ties keep the earlier surface). Returns black when nothing is
/// hit. Hit distances are not filtered by sign, matching the intersection
/// contract.
pub fn render_pixel(scene: &Scene, origin: Vec3, direction: Vec3) -> Rgb {
    let mut t_min = f32::INFINITY;
    let mut result = Rgb::BLACK;

    for surface in scene.surfaces() {
        if let Some(t) = surface.intersect(origin, direction) {
            if t < t_min {
                t_min = t;
                result = surface.shade(origin, direction, t, scene);
            }
        }
    }

    result
}

/// Render the scene into a freshly allocated frame buffer.
///
/// Pixels are visited in row-major order; each cell is written exactly once.
pub fn render(camera: &Camera, scene: &Scene) -> FrameBuffer {
    log::debug!(
        "rendering {}x{} ({} surfaces, {} lights)",
        camera.image_width,
        camera.image_height,
        scene.surface_count(),
        scene.light_count()
    );

    let mut image = FrameBuffer::new(camera.image_width, camera.image_height);
    let origin = camera.position();

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let ray = camera.get_ray(x, y);
            image.set(x, y, render_pixel(scene, origin, ray.direction));
        }
    }

    image
}

/// Render with one rayon task per image row.
///
/// Each pixel reads only the shared scene and camera and writes a disjoint
/// frame-buffer cell, so the output is identical to [`render`].
pub fn render_parallel(camera: &Camera, scene: &Scene) -> FrameBuffer {
    log::debug!(
        "rendering {}x{} in parallel ({} surfaces, {} lights)",
        camera.image_width,
        camera.image_height,
        scene.surface_count(),
        scene.light_count()
    );

    let mut image = FrameBuffer::new(camera.image_width, camera.image_height);
    let width = camera.image_width as usize;
    let origin = camera.position();

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.get_ray(x as u32, y as u32);
                *pixel = render_pixel(scene, origin, ray.direction);
            }
        });

    image
}
