//! Scene description: surfaces and lights.

use crate::surface::Surface;
use orb_math::Vec3;

/// A point light with a position and a color intensity.
///
/// The color is an intensity per channel and is not bounded to [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub color: Vec3,
    pub position: Vec3,
}

impl Light {
    /// Create a new light.
    pub fn new(color: Vec3, position: Vec3) -> Self {
        Self { color, position }
    }
}

/// A complete renderable scene.
///
/// Surfaces and lights are kept in insertion order. The scene is append-only
/// during setup and read-only for the whole render pass.
#[derive(Clone, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
    ambient_light: Vec3,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a surface.
    pub fn add_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    /// Append a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Set the ambient light consulted by the Phong model.
    pub fn set_ambient_light(&mut self, ambient: Vec3) {
        self.ambient_light = ambient;
    }

    /// Surfaces in insertion order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// The light consulted by the shading models.
    ///
    /// Panics if the scene has no lights; shading a lit material against an
    /// unlit scene is a scene-construction error.
    pub fn first_light(&self) -> &Light {
        &self.lights[0]
    }

    pub fn ambient_light(&self) -> Vec3 {
        self.ambient_light
    }

    /// Get surface count.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Lambert, Material};
    use crate::surface::Sphere;

    #[test]
    fn test_scene_setup() {
        let mut scene = Scene::new();
        assert_eq!(scene.surface_count(), 0);
        assert_eq!(scene.light_count(), 0);

        scene.add_surface(Surface::Sphere(Sphere::new(
            1.0,
            Vec3::new(0.0, 0.0, 8.0),
            Material::Lambert(Lambert::new(Vec3::X)),
        )));
        scene.add_light(Light::new(Vec3::ONE, Vec3::new(0.0, 10.0, 0.0)));
        scene.add_light(Light::new(Vec3::splat(0.5), Vec3::ZERO));

        assert_eq!(scene.surface_count(), 1);
        assert_eq!(scene.light_count(), 2);
        // Insertion order is preserved; shading only ever reads the first
        assert_eq!(scene.first_light().position, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_ambient_light_default() {
        let mut scene = Scene::new();
        assert_eq!(scene.ambient_light(), Vec3::ZERO);

        scene.set_ambient_light(Vec3::splat(0.1));
        assert_eq!(scene.ambient_light(), Vec3::splat(0.1));
    }
}
