//! Irradiance-based star brightness.
//!
//! Apparent flux falls off with the square of the camera distance. The
//! photon count collected over one exposure is computed at a single
//! wavelength (550 nm), scaled by ISO gain and normalized by a saturation
//! photon count to give a dimensionless intensity. The intensity scales a
//! base color in linear light before tone mapping.

use std::f64::consts::PI;

use super::mathutils::apply_intensity;
use super::Optics;
use crate::Color;

/// Solar irradiance at 1 AU in W/m^2
pub const SOLAR_FLUX_W_M2: f64 = 1361.0;

const PLANCK_J_S: f64 = 6.626e-34;
const SPEED_OF_LIGHT_M_S: f64 = 3.0e8;
const WAVELENGTH_M: f64 = 550e-9;

/// Energy of a single 550 nm photon in joules
pub fn photon_energy_j() -> f64 {
    PLANCK_J_S * SPEED_OF_LIGHT_M_S / WAVELENGTH_M
}

/// Apparent flux of a body in W/m^2
///
/// # Arguments
/// * `luminosity` - luminosity in solar units
/// * `distance_au` - distance from the observer in AU
/// * `solar_flux` - flux of one solar luminosity at 1 AU
pub fn apparent_flux(luminosity: f64, distance_au: f64, solar_flux: f64) -> f64 {
    solar_flux * (luminosity / (distance_au * distance_au))
}

impl Optics {
    /// Entrance pupil area in m^2
    pub fn aperture_area_m2(&self) -> f64 {
        let focal_length_m = self.focal_length_mm / 1000.0;
        let radius = focal_length_m / self.f_number * 0.5;
        PI * radius * radius
    }

    /// Photons collected over one exposure for a given flux in W/m^2
    pub fn photon_count(&self, flux: f64) -> f64 {
        flux * self.aperture_area_m2() * self.exposure_s / photon_energy_j()
    }

    pub fn iso_gain(&self) -> f64 {
        self.iso / 100.0
    }
}

/// How the per-body intensity is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntensityMode {
    /// Intensity follows from flux and exposure
    Physical,
    /// Every body uses the same fixed intensity, regardless of distance
    SeeAll(f64),
}

/// Turns luminosity and distance into a display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Photometer {
    pub solar_flux_w_m2: f64,
    pub base_color: [u8; 3],
    pub mode: IntensityMode,
}

impl Default for Photometer {
    fn default() -> Self {
        Photometer {
            solar_flux_w_m2: SOLAR_FLUX_W_M2,
            base_color: [255, 115, 60],
            mode: IntensityMode::Physical,
        }
    }
}

impl Photometer {
    /// Physical intensity, ignoring the see-all override
    pub fn physical_intensity(&self, luminosity: f64, distance_au: f64, optics: &Optics) -> f64 {
        let flux = apparent_flux(luminosity, distance_au, self.solar_flux_w_m2);
        optics.photon_count(flux) / optics.photon_saturation * optics.iso_gain()
    }

    /// Display intensity, honoring the see-all override
    pub fn intensity(&self, luminosity: f64, distance_au: f64, optics: &Optics) -> f64 {
        match self.mode {
            IntensityMode::Physical => self.physical_intensity(luminosity, distance_au, optics),
            IntensityMode::SeeAll(fixed) => fixed,
        }
    }

    /// Tone-mapped sRGB color with alpha `clamp(255 * I, 0, 255)`
    pub fn shade(&self, intensity: f64) -> Color {
        let [r, g, b] = apply_intensity(self.base_color, intensity);
        let alpha = (255.0 * intensity).clamp(0.0, 255.0) as u8;
        image::Rgba([r, g, b, alpha])
    }
}
