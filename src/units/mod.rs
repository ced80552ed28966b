//! Distance and vector types shared by the catalog, camera and renderer.

mod distance;
mod vec3;

pub use distance::Distance;
pub use vec3::{Component, Vec3};

/// World-space position in fixed-point megameters
pub type Position = Vec3<Distance>;
