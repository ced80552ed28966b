//! Start-up configuration for the flythrough.
//!
//! All values are fixed once loaded; nothing is re-read while the frame
//! loop runs. Every key in the TOML file is optional and falls back to
//! the [`Default`] value.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::camera::photometry::{IntensityMode, Photometer, SOLAR_FLUX_W_M2};
use crate::camera::{Optics, Viewport};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Camera speed at start-up, in Mm per second
    pub initial_speed_mm: i64,
    pub focal_length_mm: f64,
    pub f_number: f64,
    pub exposure_s: f64,
    pub iso: f64,
    pub sensor_width_mm: f64,
    pub photon_saturation: f64,
    pub solar_flux_w_m2: f64,
    /// Fixed intensity used when every body is forced visible
    pub see_all_intensity: f64,
    pub base_color: [u8; 3],
    pub background: [u8; 3],
    /// Pointer look rate, in degrees per pixel per radian of field of view
    pub pointer_sensitivity: f64,
    /// Share of hardware threads given to the frame update pool
    pub worker_fraction: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1920,
            height: 1080,
            fps: 144,
            initial_speed_mm: 300,
            focal_length_mm: 8.0,
            f_number: 2.8,
            exposure_s: 2.0,
            iso: 1600.0,
            sensor_width_mm: 36.0,
            photon_saturation: 1.0e6,
            solar_flux_w_m2: SOLAR_FLUX_W_M2,
            see_all_intensity: 0.4,
            base_color: [255, 115, 60],
            background: [12, 12, 12],
            pointer_sensitivity: 0.05,
            worker_fraction: 0.5,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be non-zero".into()));
        }
        let positive = [
            ("focal_length_mm", self.focal_length_mm),
            ("f_number", self.f_number),
            ("exposure_s", self.exposure_s),
            ("iso", self.iso),
            ("sensor_width_mm", self.sensor_width_mm),
            ("photon_saturation", self.photon_saturation),
            ("solar_flux_w_m2", self.solar_flux_w_m2),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.worker_fraction > 0.0 && self.worker_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "worker_fraction must be in (0, 1], got {}",
                self.worker_fraction
            )));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn optics(&self) -> Optics {
        Optics {
            focal_length_mm: self.focal_length_mm,
            f_number: self.f_number,
            exposure_s: self.exposure_s,
            iso: self.iso,
            photon_saturation: self.photon_saturation,
        }
    }

    pub fn photometer(&self, see_all: bool) -> Photometer {
        Photometer {
            solar_flux_w_m2: self.solar_flux_w_m2,
            base_color: self.base_color,
            mode: if see_all {
                IntensityMode::SeeAll(self.see_all_intensity)
            } else {
                IntensityMode::Physical
            },
        }
    }

    /// Fixed simulation step in seconds
    pub fn dt(&self) -> f64 {
        1.0 / self.fps as f64
    }
}
