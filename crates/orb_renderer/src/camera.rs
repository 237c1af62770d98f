//! Camera for ray generation.

use orb_math::{Ray, Vec3};

/// Vertical field-of-view scale applied to the image-plane basis.
pub const FOV_SCALE: f32 = 0.66;

/// Pinhole camera generating one ray through the center of each pixel.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    position: Vec3,
    up: Vec3,
    at: Vec3,

    // Cached computed values (set by initialize())
    direction: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 1024,
            position: Vec3::ZERO,
            up: Vec3::Y,
            at: Vec3::Z,
            // Cached values (computed by initialize())
            direction: Vec3::Z,
            horizontal: Vec3::X,
            vertical: Vec3::Y,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position and orientation.
    pub fn with_position(mut self, position: Vec3, at: Vec3, up: Vec3) -> Self {
        self.position = position;
        self.at = at;
        self.up = up;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    ///
    /// Caches the view direction and the image-plane basis: `horizontal`
    /// spans the image width scaled by the aspect ratio, `vertical` spans
    /// the image height.
    pub fn initialize(&mut self) {
        let aspect = self.image_width as f32 / self.image_height as f32;

        self.direction = (self.at - self.position).normalize();
        self.horizontal = self.direction.cross(self.up).normalize() * (FOV_SCALE * aspect);
        self.vertical = self.horizontal.cross(self.direction).normalize() * FOV_SCALE;
    }

    /// Generate the ray through the center of pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let u = (x as f32 + 0.5) / self.image_width as f32;
        let v = (y as f32 + 0.5) / self.image_height as f32;

        let direction =
            (self.direction + self.horizontal * (u - 0.5) + self.vertical * (v - 0.5)).normalize();

        Ray::new(self.position, direction)
    }

    /// Get the camera position (every generated ray originates here).
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
