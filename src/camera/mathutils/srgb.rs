//! sRGB transfer functions and tone mapping for star colors.

/// Decode an 8-bit sRGB channel into linear light in [0, 1]
#[inline]
pub fn srgb8_to_linear(c: u8) -> f64 {
    let cs = c as f64 / 255.0;
    if cs <= 0.04045 {
        cs / 12.92
    } else {
        ((cs + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light into an 8-bit sRGB channel, rounded and clamped
#[inline]
pub fn linear_to_srgb8(linear: f64) -> u8 {
    let linear = if linear.is_nan() { 0.0 } else { linear.max(0.0) };
    let srgb = if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0).clamp(0.0, 255.0).round() as u8
}

/// Reinhard operator `v / (1 + v)`: maps [0, inf) into [0, 1)
#[inline]
pub fn tone_map(v: f64) -> f64 {
    let v = v.max(0.0);
    if v == f64::INFINITY {
        return 1.0;
    }
    v / (1.0 + v)
}

/// Scale a base sRGB color by a linear intensity and tone-map it back to sRGB
pub fn apply_intensity(base: [u8; 3], intensity: f64) -> [u8; 3] {
    base.map(|c| linear_to_srgb8(tone_map(srgb8_to_linear(c) * intensity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_round_trip() {
        for c in 0..=255u8 {
            assert_eq!(linear_to_srgb8(srgb8_to_linear(c)), c);
        }
    }

    #[test]
    fn test_transfer_endpoints() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-12);
        assert_eq!(linear_to_srgb8(-1.0), 0);
        assert_eq!(linear_to_srgb8(5.0), 255);
        assert_eq!(linear_to_srgb8(f64::NAN), 0);
    }

    #[test]
    fn test_tone_map_bounded() {
        let mut prev = -1.0;
        for exp in -6..=12 {
            let v = 10f64.powi(exp);
            let t = tone_map(v);
            assert!(t > prev);
            assert!((0.0..1.0).contains(&t), "v = {v}, t = {t}");
            prev = t;
        }
        assert_eq!(tone_map(0.0), 0.0);
        assert_eq!(tone_map(f64::INFINITY), 1.0);
        assert_eq!(tone_map(-3.0), 0.0);
        assert_eq!(tone_map(f64::NAN), 0.0);
    }

    #[test]
    fn test_apply_intensity_saturates_gracefully() {
        let base = [255, 115, 60];
        assert_eq!(apply_intensity(base, 0.0), [0, 0, 0]);

        let mut prev = [0u8; 3];
        for i in [0.01, 0.1, 0.4, 1.0, 10.0, 1.0e3, 1.0e6] {
            let out = apply_intensity(base, i);
            for ch in 0..3 {
                assert!(out[ch] >= prev[ch], "channel {ch} dropped at I = {i}");
            }
            prev = out;
        }
        assert_eq!(apply_intensity(base, 1.0e9), [255, 255, 255]);
        // unit intensity halves the linear value of a full channel
        assert_eq!(apply_intensity(base, 1.0)[0], linear_to_srgb8(0.5));
    }
}
