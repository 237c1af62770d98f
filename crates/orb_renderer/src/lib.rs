//! ORB Renderer - offline CPU ray tracing
//!
//! Renders sphere scenes with analytic ray intersection and local
//! (non-recursive) shading. The renderer produces a row-major frame buffer
//! of 8-bit color samples; encoding and persisting the image is left to an
//! external sink.

mod camera;
mod color;
mod framebuffer;
mod material;
mod renderer;
mod scene;
mod surface;

pub use camera::{Camera, FOV_SCALE};
pub use color::Rgb;
pub use framebuffer::FrameBuffer;
pub use material::{Lambert, Material, Phong};
pub use renderer::{render, render_parallel, render_pixel};
pub use scene::{Light, Scene};
pub use surface::{Sphere, Surface};

/// Re-export Vec3 and common math types from orb_math
pub use orb_math::{Ray, Vec3};
