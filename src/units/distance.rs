//! Fixed-point distance with megameter granularity.
//!
//! A [`Distance`] is a signed count of megameters (Mm). Sums and
//! differences are plain integer arithmetic, so a position built from many
//! small steps never drifts the way an accumulated `f64` would at
//! interstellar scale. Conversions to the astronomical units are divisions
//! by fixed integer constants.
//!
//! The backing `i64` covers roughly 9.2e18 Mm (about 300 Mpc), far beyond
//! any catalog entry or camera excursion, so overflow is not checked.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(i64);

impl Distance {
    /// Megameters per astronomical unit
    pub const AU: i64 = 149_597;
    /// Megameters per light-year
    pub const LY: i64 = 9_460_730_472;
    /// Megameters per parsec
    pub const PC: i64 = 30_856_775_814;
    /// Megameters per kiloparsec
    pub const KPC: i64 = Self::PC * 1_000;

    pub const ZERO: Distance = Distance(0);

    pub const fn from_mm(mm: i64) -> Self {
        Distance(mm)
    }

    pub fn from_au(au: f64) -> Self {
        Self::scaled(au, Self::AU)
    }

    pub fn from_ly(ly: f64) -> Self {
        Self::scaled(ly, Self::LY)
    }

    pub fn from_pc(pc: f64) -> Self {
        Self::scaled(pc, Self::PC)
    }

    pub fn from_kpc(kpc: f64) -> Self {
        Self::scaled(kpc, Self::KPC)
    }

    // `as` truncates toward zero
    #[inline]
    fn scaled(magnitude: f64, unit_mm: i64) -> Self {
        Distance((magnitude * unit_mm as f64) as i64)
    }

    pub const fn as_mm(self) -> i64 {
        self.0
    }

    pub fn as_au(self) -> f64 {
        self.0 as f64 / Self::AU as f64
    }

    pub fn as_ly(self) -> f64 {
        self.0 as f64 / Self::LY as f64
    }

    pub fn as_pc(self) -> f64 {
        self.0 as f64 / Self::PC as f64
    }

    pub fn as_kpc(self) -> f64 {
        self.0 as f64 / Self::KPC as f64
    }

    pub fn abs(self) -> Self {
        Distance(self.0.abs())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Mm", self.0)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        Distance(self.0 - rhs.0)
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance(-self.0)
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, scalar: f64) -> Distance {
        Distance((self.0 as f64 * scalar) as i64)
    }
}

impl Mul<Distance> for f64 {
    type Output = Distance;

    fn mul(self, distance: Distance) -> Distance {
        distance * self
    }
}

impl Div<f64> for Distance {
    type Output = Distance;

    fn div(self, scalar: f64) -> Distance {
        Distance((self.0 as f64 / scalar) as i64)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Distance {
    fn sub_assign(&mut self, rhs: Distance) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<f64> for Distance {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl DivAssign<f64> for Distance {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

impl Zero for Distance {
    fn zero() -> Self {
        Distance::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        Distance(iter.map(|d| d.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_unit_constants() {
        assert_eq!(Distance::from_pc(1.0).as_mm(), 30_856_775_814);
        assert_eq!(Distance::from_au(1.0).as_mm(), 149_597);
        assert_eq!(Distance::from_ly(1.0).as_mm(), 9_460_730_472);
        assert_eq!(Distance::from_kpc(1.0).as_mm(), 30_856_775_814_000);
        assert_eq!(Distance::from_mm(42).as_mm(), 42);
    }

    #[test]
    fn test_round_trip_within_one_mm() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let units: [(fn(f64) -> Distance, fn(Distance) -> f64, i64); 4] = [
            (Distance::from_au, Distance::as_au, Distance::AU),
            (Distance::from_ly, Distance::as_ly, Distance::LY),
            (Distance::from_pc, Distance::as_pc, Distance::PC),
            (Distance::from_kpc, Distance::as_kpc, Distance::KPC),
        ];

        for (from, to, unit) in units {
            for _ in 0..1000 {
                let m: f64 = rng.random_range(-1.0e4..1.0e4);
                let back = to(from(m));
                // one Mm of truncation plus the f64 rounding of the product
                let tol = 1.0 / unit as f64 + m.abs() * 1.0e-15;
                assert!(
                    (back - m).abs() <= tol,
                    "m = {m}, back = {back}, unit = {unit}"
                );
            }
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(Distance::from_au(1.5 / 149_597.0).as_mm(), 1);
        assert_eq!(Distance::from_au(-1.5 / 149_597.0).as_mm(), -1);
        assert_eq!((Distance::from_mm(7) * 0.5).as_mm(), 3);
        assert_eq!((Distance::from_mm(-7) * 0.5).as_mm(), -3);
        assert_eq!((Distance::from_mm(7) / 2.0).as_mm(), 3);
        assert_eq!((Distance::from_mm(1) * 1.0e-9).as_mm(), 0);
    }

    #[test]
    fn test_integer_arithmetic_does_not_drift() {
        let step = Distance::from_mm(300);
        let mut pos = Distance::ZERO;
        for _ in 0..1_000_000 {
            pos += step;
        }
        for _ in 0..1_000_000 {
            pos -= step;
        }
        assert_eq!(pos, Distance::ZERO);
        assert_eq!(-step + step, Distance::ZERO);
    }

    #[test]
    fn test_ordering_follows_integer() {
        let near = Distance::from_au(1.0);
        let far = Distance::from_ly(1.0);
        assert!(near < far);
        assert!(-far < near);
        assert_eq!(near.max(far), far);
    }

    #[test]
    fn test_scale_assign() {
        let mut speed = Distance::from_mm(300);
        speed *= 1.5;
        assert_eq!(speed.as_mm(), 450);
        speed /= 1.5;
        assert_eq!(speed.as_mm(), 300);
        assert_eq!((2.0 * speed).as_mm(), 600);
    }
}
