// Re-export glam for convenience
pub use glam::*;

// ORB math types
mod ray;
pub use ray::Ray;
