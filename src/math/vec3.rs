use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 3D vector.
///
/// Used by value everywhere; every operation returns a fresh vector and
/// never mutates its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along +Y (world up).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Construct from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length.
    ///
    /// The zero vector has no direction; normalizing it yields NaN
    /// components. Callers guarantee non-zero input — the camera math
    /// upholds this via the orbit-radius clamp (`eye != center` always).
    #[must_use]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_yields_unit_length() {
        let cases = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -7.5),
            Vec3::new(0.001, 0.0, 0.0),
            Vec3::new(100.0, -250.0, 999.0),
        ];
        for v in cases {
            let n = v.normalize();
            assert!(
                (n.length() - 1.0).abs() < 1e-6,
                "normalize({v:?}) has length {}",
                n.length()
            );
        }
    }

    #[test]
    fn cross_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(0.5, 3.0, -1.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-6);
        assert!(c.dot(b).abs() < 1e-6);
    }

    #[test]
    fn subtract_is_componentwise() {
        let a = Vec3::new(5.0, 1.0, -2.0);
        let b = Vec3::new(2.0, 4.0, 1.0);
        assert_eq!(a - b, Vec3::new(3.0, -3.0, -3.0));
    }

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).dot(Vec3::Y), 0.0);
    }
}
