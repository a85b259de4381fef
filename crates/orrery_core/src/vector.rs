use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 3-component vector in SI units (meters, meters/second or newtons,
/// depending on what it holds).
///
/// Arithmetic never mutates an operand: every operator returns a fresh value.
/// Scalar operands broadcast to all three components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

macro_rules! impl_elementwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vector3 {
            type Output = Vector3;

            fn $method(self, rhs: Vector3) -> Vector3 {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl $trait<f64> for Vector3 {
            type Output = Vector3;

            fn $method(self, rhs: f64) -> Vector3 {
                Vector3::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }
    };
}

impl_elementwise!(Add, add, +);
impl_elementwise!(Sub, sub, -);
impl_elementwise!(Mul, mul, *);
impl_elementwise!(Div, div, /);

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_and_scalar_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector3::new(4.0, 2.5, 2.0));

        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = a;
        let _ = a + b;
        let _ = a * 10.0;
        assert_eq!(a, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(b, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_magnitude_and_distance() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(v.magnitude_squared(), 169.0);
        assert_eq!(v.magnitude(), 13.0);

        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(4.0, 5.0, 1.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector3::new(0.0, -7.0, 0.0).normalize();
        assert_eq!(n, Vector3::new(0.0, -1.0, 0.0));
        assert!(!Vector3::ZERO.normalize().is_finite());
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        let v = Vector3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_compound_assignment() {
        let mut acc = Vector3::ZERO;
        acc += Vector3::new(1.0, 2.0, 3.0);
        acc += Vector3::new(1.0, 2.0, 3.0);
        acc -= Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(acc, Vector3::new(1.5, 3.5, 5.5));
    }
}
