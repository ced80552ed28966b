pub mod photometry;
pub mod projection;

mod mathutils;
pub use mathutils::{angle_normalize, apply_intensity, linear_to_srgb8, srgb8_to_linear, tone_map};

use crate::units::{Distance, Position};
use crate::Vector3;

/// Pixel dimensions of the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1920, 1080)
    }
}

/// Lens and exposure settings of the virtual camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optics {
    pub focal_length_mm: f64,
    pub f_number: f64,
    pub exposure_s: f64,
    pub iso: f64,
    /// Photon count that maps to unit intensity at ISO 100
    pub photon_saturation: f64,
}

impl Default for Optics {
    fn default() -> Self {
        Optics {
            focal_length_mm: 8.0,
            f_number: 2.8,
            exposure_s: 2.0,
            iso: 1600.0,
            photon_saturation: 1.0e6,
        }
    }
}

/// Free-flying observer.
///
/// Yaw rotates about the world Z axis and pitch tilts out of the XY plane.
/// With both at zero the camera looks along +Y. The projection distance
/// `d` is derived from the focal length and must be refreshed with
/// [`Camera::update_projection`] after changing the optics or viewport.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Position,
    yaw: f64,
    pitch: f64,
    pub optics: Optics,
    pub sensor_width_mm: f64,
    viewport: Viewport,
    d: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Viewport::default(), Optics::default(), 36.0)
    }
}

impl Camera {
    pub fn new(viewport: Viewport, optics: Optics, sensor_width_mm: f64) -> Self {
        let mut camera = Camera {
            position: Position::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            optics,
            sensor_width_mm,
            viewport,
            d: 0.0,
        };
        camera.update_projection();
        camera
    }

    pub fn from_config(config: &crate::config::RenderConfig) -> Self {
        Camera::new(config.viewport(), config.optics(), config.sensor_width_mm)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.update_projection();
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Projection distance in pixels
    pub fn projection_distance(&self) -> f64 {
        self.d
    }

    /// Horizontal field of view in radians
    ///
    /// # Returns
    /// `2 * atan(sensor_width / (2 * focal_length))`
    pub fn fov_rad(&self) -> f64 {
        2.0 * (self.sensor_width_mm / (2.0 * self.optics.focal_length_mm)).atan()
    }

    pub fn fov_deg(&self) -> f64 {
        self.fov_rad().to_degrees()
    }

    /// Recompute the projection distance from the current field of view
    pub fn update_projection(&mut self) {
        self.d = self.viewport.width as f64 / (2.0 * (self.fov_rad() / 2.0).tan());
    }

    /// Set absolute orientation, wrapping both angles into (-pi, pi]
    pub fn set_orientation(&mut self, yaw: f64, pitch: f64) {
        self.yaw = angle_normalize(yaw);
        self.pitch = angle_normalize(pitch);
    }

    /// Accumulate yaw and pitch deltas, wrapping both angles into (-pi, pi]
    pub fn rotate(&mut self, dyaw: f64, dpitch: f64) {
        self.set_orientation(self.yaw + dyaw, self.pitch + dpitch);
    }

    /// Unit vector along the viewing axis
    pub fn forward(&self) -> Vector3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vector3::new(-sy * cp, cy * cp, sp)
    }

    /// Horizontal unit vector that projects to the right of screen center
    pub fn right(&self) -> Vector3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vector3::new(-cy, -sy, 0.0)
    }

    /// Unit vector that projects above screen center
    pub fn up(&self) -> Vector3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vector3::new(sy * sp, -cy * sp, cp)
    }

    /// Move the camera `length` along a direction in world space
    pub fn translate(&mut self, direction: &Vector3, length: Distance) {
        self.position += Position::along(direction, length);
    }
}
