//! Perspective projection of world positions onto the viewport.

use super::Camera;
use crate::units::Position;

/// Projected point in pixel space with signed depth.
///
/// A depth of exactly zero marks a rejected point (behind or on the camera
/// plane). Accepted points always have `z > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScreenPoint {
    pub const REJECTED: ScreenPoint = ScreenPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.z != 0.0
    }
}

/// Project a world position through the camera.
///
/// The camera-relative offset is taken in whole megameters before any
/// floating point math so that nearby bodies far from the origin do not
/// lose precision to cancellation. The offset is rotated by yaw about Z,
/// then by pitch about the lateral axis. Points with a forward component
/// `ry <= 0` return [`ScreenPoint::REJECTED`]; nothing else is clipped.
pub fn project(camera: &Camera, point: &Position) -> ScreenPoint {
    let [tx, ty, tz] = (*point - camera.position).as_mm();
    let (tx, ty, tz) = (tx as f64, ty as f64, tz as f64);

    let (sy, cy) = camera.yaw().sin_cos();
    let (sp, cp) = camera.pitch().sin_cos();

    let rx = tx * cy + ty * sy;
    let ry = -tx * sy + ty * cy;
    let rz = tz * cp - ry * sp;
    let ry = tz * sp + ry * cp;

    if ry <= 0.0 {
        return ScreenPoint::REJECTED;
    }

    let (half_w, half_h) = camera.viewport().center();
    let d = camera.projection_distance();

    ScreenPoint {
        x: rx / -ry * d + half_w,
        y: rz / -ry * d + half_h,
        z: ry,
    }
}
