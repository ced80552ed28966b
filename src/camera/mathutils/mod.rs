mod angle;
mod srgb;

pub use angle::angle_normalize;
pub use srgb::*;
