use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use super::Distance;

/// Scalar capability set required by [`Vec3`]: add, subtract and scale by a real.
pub trait Component:
    Copy
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
}

impl<T> Component for T where
    T: Copy
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + Mul<f64, Output = T>
        + Div<f64, Output = T>
{
}

/// Three-component vector over a scalar type.
///
/// `Vec3<f64>` is used for screen and linear math, `Vec3<Distance>` for world
/// positions. The two never mix without an explicit conversion such as
/// [`Vec3::<Distance>::as_au`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Component> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    pub fn map<U, F: Fn(T) -> U>(self, f: F) -> Vec3<U> {
        Vec3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }
}

impl Vec3<Distance> {
    pub const ZERO: Vec3<Distance> = Vec3 {
        x: Distance::ZERO,
        y: Distance::ZERO,
        z: Distance::ZERO,
    };

    /// Offset of `length` along a (unit) direction, truncated per axis to whole Mm
    pub fn along(direction: &crate::Vector3, length: Distance) -> Self {
        Self {
            x: length * direction.x,
            y: length * direction.y,
            z: length * direction.z,
        }
    }

    pub fn as_mm(&self) -> [i64; 3] {
        [self.x.as_mm(), self.y.as_mm(), self.z.as_mm()]
    }

    pub fn as_au(&self) -> Vec3<f64> {
        self.map(Distance::as_au)
    }

    pub fn as_pc(&self) -> Vec3<f64> {
        self.map(Distance::as_pc)
    }
}

impl From<crate::Vector3> for Vec3<f64> {
    fn from(v: crate::Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3<f64>> for crate::Vector3 {
    fn from(v: Vec3<f64>) -> Self {
        crate::Vector3::new(v.x, v.y, v.z)
    }
}

impl<T: Component> Add for Vec3<T> {
    type Output = Vec3<T>;

    fn add(self, rhs: Self) -> Self {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Component> Sub for Vec3<T> {
    type Output = Vec3<T>;

    fn sub(self, rhs: Self) -> Self {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Component> Neg for Vec3<T> {
    type Output = Vec3<T>;

    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Component> Mul<f64> for Vec3<T> {
    type Output = Vec3<T>;

    fn mul(self, scalar: f64) -> Self {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Component> Mul<Vec3<T>> for f64 {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        v * self
    }
}

impl<T: Component> Div<f64> for Vec3<T> {
    type Output = Vec3<T>;

    fn div(self, scalar: f64) -> Self {
        Vec3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<T: Component> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Component> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Component> MulAssign<f64> for Vec3<T> {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl<T: Component> DivAssign<f64> for Vec3<T> {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}
