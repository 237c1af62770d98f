use criterion::{criterion_group, criterion_main, Criterion};
use orb_renderer::{
    render, render_parallel, Camera, Lambert, Light, Material, Scene, Sphere, Surface, Vec3,
};

fn example_scene() -> Scene {
    let mut scene = Scene::new();

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
        Material::Lambert(Lambert::new(Vec3::ONE)),
    )));

    scene.add_light(Light::new(Vec3::ONE, Vec3::new(0.0, 10.0, 0.0)));

    scene
}

fn example_camera() -> Camera {
    let mut camera = Camera::new().with_resolution(256, 256).with_position(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::Y,
    );
    camera.initialize();
    camera
}

fn bench_render(c: &mut Criterion) {
    let scene = example_scene();
    let camera = example_camera();

    c.bench_function("render_256x256", |b| b.iter(|| render(&camera, &scene)));
    c.bench_function("render_parallel_256x256", |b| {
        b.iter(|| render_parallel(&camera, &scene))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
