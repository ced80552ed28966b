use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians into (-pi, pi].
///
/// Values already in range are returned unchanged, so repeated application
/// is a no-op.
#[inline]
pub fn angle_normalize(a: f64) -> f64 {
    let mut wrapped = a - TAU * ((a - PI) / TAU).ceil();
    // rounding in the subtraction can land a hair outside the interval
    if wrapped > PI {
        wrapped -= TAU;
    } else if wrapped <= -PI {
        wrapped += TAU;
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_in_range_is_identity() {
        for a in [0.0, 1.0, -1.0, PI, -PI + 1e-12, 3.0, -3.0] {
            assert_eq!(angle_normalize(a), a);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(angle_normalize(-PI), PI);
        assert!((angle_normalize(TAU)).abs() < 1e-12);
        assert!((angle_normalize(PI + 0.5) - (-PI + 0.5)).abs() < 1e-12);
        assert!((angle_normalize(-PI - 0.5) - (PI - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_accumulation_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut yaw = 0.0;
        let mut pitch = 0.0;
        for _ in 0..100_000 {
            yaw = angle_normalize(yaw + rng.random_range(-0.5..1.0));
            pitch = angle_normalize(pitch + rng.random_range(-2.0..0.3));
            assert!(yaw > -PI && yaw <= PI, "yaw = {yaw}");
            assert!(pitch > -PI && pitch <= PI, "pitch = {pitch}");
            assert_eq!(angle_normalize(yaw), yaw);
            assert_eq!(angle_normalize(pitch), pitch);
        }
    }

    #[test]
    fn test_large_values() {
        let a = angle_normalize(1.0e6);
        assert!(a > -PI && a <= PI);
        assert!(((1.0e6 - a) / TAU - ((1.0e6 - a) / TAU).round()).abs() < 1e-6);
    }
}
