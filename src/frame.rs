//! Per-frame state and the parallel body update.
//!
//! The control thread owns a [`FrameContext`], mutates it from input, then
//! hands it by shared reference to [`FrameUpdater::update`]. Every body maps
//! to exactly one vertex slot, so workers never touch the same slot and no
//! locking is needed. `update` returns only after all slots are written.

use rayon::prelude::*;

use crate::camera::photometry::Photometer;
use crate::camera::projection::{project, ScreenPoint};
use crate::camera::Camera;
use crate::catalogs::Body;
use crate::config::RenderConfig;
use crate::units::Distance;
use crate::Color;

/// One renderer-owned point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const HIDDEN: Vertex = Vertex {
        position: [0.0, 0.0],
        color: image::Rgba([0, 0, 0, 0]),
    };

    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Vertex {
            position: [x as f32, y as f32],
            color,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.color.0[3] != 0
    }
}

/// Everything one frame needs, passed explicitly from start-up to shutdown
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub config: RenderConfig,
    pub camera: Camera,
    /// Travel per second of simulated time
    pub speed: Distance,
    pub see_all: bool,
    pub orbit_lines: bool,
}

impl FrameContext {
    pub fn new(config: RenderConfig) -> Self {
        let camera = Camera::from_config(&config);
        let speed = Distance::from_mm(config.initial_speed_mm);
        FrameContext {
            config,
            camera,
            speed,
            see_all: false,
            orbit_lines: false,
        }
    }

    pub fn photometer(&self) -> Photometer {
        self.config.photometer(self.see_all)
    }
}

/// Project and shade a single body into its vertex slot.
///
/// Rejected bodies only get their alpha cleared; the slot stays in the
/// buffer.
#[inline]
pub fn shade_body(camera: &Camera, photometer: &Photometer, body: &Body, vertex: &mut Vertex) {
    let dx = (camera.position.x - body.position.x).as_au();
    let dy = (camera.position.y - body.position.y).as_au();
    let dz = (camera.position.z - body.position.z).as_au();
    let distance_au = (dx * dx + dy * dy + dz * dz).sqrt();

    let intensity = photometer.intensity(body.luminosity, distance_au, &camera.optics);

    let p: ScreenPoint = project(camera, &body.position);
    if p.is_visible() {
        vertex.position = [p.x as f32, p.y as f32];
        vertex.color = photometer.shade(intensity);
    } else {
        vertex.color.0[3] = 0;
    }
}

/// Worker pool for the per-body loop
pub struct FrameUpdater {
    pool: rayon::ThreadPool,
}

impl FrameUpdater {
    /// Pool sized to a fraction of the available hardware threads, at least one
    pub fn new(worker_fraction: f64) -> Result<Self, rayon::ThreadPoolBuildError> {
        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let threads = ((available as f64 * worker_fraction) as usize).max(1);
        Self::with_threads(threads)
    }

    pub fn with_threads(threads: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("frame-worker-{}", i))
            .build()?;
        tracing::info!("frame update pool using {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Re-evaluate every body into `vertices`.
    ///
    /// # Panics
    /// If `vertices` and `bodies` differ in length.
    pub fn update(&self, ctx: &FrameContext, bodies: &[Body], vertices: &mut [Vertex]) {
        assert_eq!(
            bodies.len(),
            vertices.len(),
            "vertex buffer must hold one slot per body"
        );

        let camera = &ctx.camera;
        let photometer = ctx.photometer();

        self.pool.install(|| {
            vertices
                .par_iter_mut()
                .zip(bodies.par_iter())
                .for_each(|(vertex, body)| shade_body(camera, &photometer, body, vertex));
        });
    }
}
