//! Overlay text: camera statistics and travel speed.

use crate::frame::FrameContext;
use crate::units::Distance;

/// Speed of light, in Mm per second, as shown in the speed readout
pub const LIGHT_SPEED_MM: f64 = 300.0;

/// Human-scale rendering of a distance.
///
/// Picks the largest of kpc, ly and AU whose magnitude is at least 0.1,
/// with two decimals. Shorter lengths are printed as whole kilometers.
pub fn format_distance(distance: Distance) -> String {
    let kpc = distance.as_kpc();
    if kpc.abs() >= 0.1 {
        return format!("{:.2} kpc", kpc);
    }
    let ly = distance.as_ly();
    if ly.abs() >= 0.1 {
        return format!("{:.2} ly", ly);
    }
    let au = distance.as_au();
    if au.abs() >= 0.1 {
        return format!("{:.2} AU", au);
    }
    format!("{} km", distance.as_mm() * 1000)
}

/// One-decimal value with an SI prefix, e.g. `1.5K` or `6.7m`
pub fn format_si(x: f64) -> String {
    if x == 0.0 {
        return "0.0".to_string();
    }
    let a = x.abs();
    let (display, suffix) = if a >= 1e12 {
        (x / 1e12, "T")
    } else if a >= 1e9 {
        (x / 1e9, "G")
    } else if a >= 1e6 {
        (x / 1e6, "M")
    } else if a >= 1e3 {
        (x / 1e3, "K")
    } else if a < 1e-9 {
        (x * 1e12, "p")
    } else if a < 1e-6 {
        (x * 1e9, "n")
    } else if a < 1e-3 {
        (x * 1e6, "µ")
    } else if a < 1.0 {
        (x * 1e3, "m")
    } else {
        (x, "")
    };
    format!("{:.1}{}", display, suffix)
}

/// Frame timing and exposure block
pub fn stats_text(ctx: &FrameContext, frame_time_s: f64) -> String {
    let camera = &ctx.camera;
    let optics = &camera.optics;
    format!(
        "{:6.2}ms {:8.4}\n\
         focal_length = {:8.1}mm ≈ {:6.1}°\n\
         f            = {:8.1}\n\
         t            = {:8.1}s\n\
         ISO          = {:8.0}\n\
         yaw          = {:.0}°\n\
         pitch        = {:.0}°\n",
        1000.0 * frame_time_s,
        ctx.config.dt(),
        optics.focal_length_mm,
        camera.fov_deg(),
        optics.f_number,
        optics.exposure_s,
        optics.iso,
        camera.yaw().to_degrees(),
        camera.pitch().to_degrees(),
    )
}

/// Speed per second and as a multiple of light speed
pub fn speed_text(speed: Distance) -> String {
    format!(
        "{} / second\n{}c",
        format_distance(speed),
        format_si(speed.as_mm() as f64 / LIGHT_SPEED_MM)
    )
}

/// Full overlay for one frame
pub fn hud_text(ctx: &FrameContext, frame_time_s: f64) -> String {
    format!("{}{}", stats_text(ctx, frame_time_s), speed_text(ctx.speed))
}
