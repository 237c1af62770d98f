//! Geometric primitives and ray intersection.

use crate::color::Rgb;
use crate::material::Material;
use crate::scene::Scene;
use orb_math::Vec3;

/// A renderable object in the scene.
///
/// Like [`Material`], the variant set is closed and dispatched by `match`.
#[derive(Debug, Clone, Copy)]
pub enum Surface {
    Sphere(Sphere),
}

impl Surface {
    /// Test the ray `origin + direction * t` against this surface.
    ///
    /// Returns the hit distance `t`, or `None` on a miss.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match self {
            Surface::Sphere(sphere) => sphere.intersect(origin, direction),
        }
    }

    /// Shade the point hit at distance `t`.
    pub fn shade(&self, origin: Vec3, direction: Vec3, t: f32, scene: &Scene) -> Rgb {
        match self {
            Surface::Sphere(sphere) => sphere.shade(origin, direction, t, scene),
        }
    }
}

/// A sphere primitive owning its material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    radius: f32,
    center: Vec3,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(radius: f32, center: Vec3, material: Material) -> Self {
        Self {
            radius,
            center,
            material,
        }
    }

    /// Analytic ray-sphere intersection.
    ///
    /// Solves the quadratic for `t` and returns the smaller root. A tangent
    /// ray (zero discriminant) counts as a miss. Roots behind the ray origin
    /// are not filtered out; callers see negative `t` values as hits.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let oc = origin - self.center;

        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2.0 * a);
        let t1 = (-b + sqrtd) / (2.0 * a);

        Some(t0.min(t1))
    }

    /// Shade via the owned material.
    ///
    /// The normal handed to the material is the negated incident ray
    /// direction, not the geometric normal at the hit point.
    pub fn shade(&self, origin: Vec3, direction: Vec3, t: f32, scene: &Scene) -> Rgb {
        self.material.shade(origin, direction, -direction, t, scene)
    }
}
