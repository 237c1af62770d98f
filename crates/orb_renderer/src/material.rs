//! Shading models.
//!
//! A material maps a hit point and its local geometry to a color sample.
//! The variant set is small and fixed, so materials are a closed enum
//! dispatched with `match` rather than trait objects; each surface owns
//! its material by value.

use crate::color::Rgb;
use crate::scene::Scene;
use orb_math::Vec3;
use std::f32::consts::FRAC_1_PI;

/// A local, non-recursive shading model.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    Lambert(Lambert),
    Phong(Phong),
}

impl Material {
    /// Shade the point at distance `t` along `origin + direction * t`.
    ///
    /// `normal` is the surface normal handed in by the surface. Shading is
    /// side-effect-free; the Phong model normalizes a local copy of the
    /// normal, never caller state. Only the first scene light is consulted.
    pub fn shade(&self, origin: Vec3, direction: Vec3, normal: Vec3, t: f32, scene: &Scene) -> Rgb {
        match self {
            Material::Lambert(lambert) => lambert.shade(origin, direction, normal, t, scene),
            Material::Phong(phong) => phong.shade(origin, direction, normal, t, scene),
        }
    }
}

/// Lambertian diffuse reflectance.
///
/// `kd` is the diffuse reflection coefficient, one value per RGB channel.
#[derive(Debug, Clone, Copy)]
pub struct Lambert {
    kd: Vec3,
}

impl Lambert {
    /// Create a new Lambertian material with the given diffuse coefficient.
    pub fn new(kd: Vec3) -> Self {
        Self { kd }
    }

    fn shade(&self, origin: Vec3, direction: Vec3, normal: Vec3, t: f32, scene: &Scene) -> Rgb {
        let light = scene.first_light();

        // The diffuse term is driven by the hit point itself, not by the
        // direction toward the light.
        let hit_point = origin + direction * t;
        let radiance = self.kd * (light.color * normal.dot(hit_point)) * FRAC_1_PI;

        Rgb::from_radiance(radiance)
    }
}

/// Phong reflectance: ambient + diffuse + specular.
#[derive(Debug, Clone, Copy)]
pub struct Phong {
    ka: Vec3,
    kd: Vec3,
    ks: Vec3,
    shininess: f32,
}

impl Phong {
    /// Create a new Phong material.
    ///
    /// - `ka`: ambient coefficient
    /// - `kd`: diffuse coefficient
    /// - `ks`: specular coefficient
    /// - `shininess`: specular exponent
    pub fn new(ka: Vec3, kd: Vec3, ks: Vec3, shininess: f32) -> Self {
        Self {
            ka,
            kd,
            ks,
            shininess,
        }
    }

    fn shade(&self, origin: Vec3, direction: Vec3, normal: Vec3, t: f32, scene: &Scene) -> Rgb {
        let light = scene.first_light();

        let ambient = self.ka * scene.ambient_light();

        let hit_point = origin + direction * t;
        let to_light = (light.position - hit_point).normalize();
        // Local copy of the normal; the incoming value may not be unit length
        let normal = normal.normalize();
        let diffuse = self.kd * (light.color * to_light.dot(normal));

        // The highlight direction is the light vector itself, not a mirror
        // reflection about the normal
        let r = to_light.normalize();
        let v = (-direction).normalize();
        let specular = (self.ks * light.color) * r.dot(v).powf(self.shininess);

        Rgb::from_radiance(ambient + diffuse + specular)
    }
}
