pub mod camera;
pub mod catalogs;
pub mod config;
pub mod frame;
pub mod hud;
pub mod input;
pub mod raster;
pub mod solar;
pub mod units;

pub use camera::Camera;
pub use catalogs::{Body, CatalogError};
pub use config::{ConfigError, RenderConfig};
pub use frame::{FrameContext, FrameUpdater, Vertex};
pub use units::{Distance, Position, Vec3};

/// Common types used in the library
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Color = image::Rgba<u8>;
