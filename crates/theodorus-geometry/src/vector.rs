//! Two-dimensional vectors in unit spiral space.
//!
//! The spiral is built before any scaling or translation, so every vertex
//! is a plain `(x, y)` pair of `f64`s. Vectors are values: they are produced
//! once by the recurrence and never mutated afterwards.

use std::ops::{Add, Mul, Neg, Sub};

/// A point or displacement in unit spiral space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component (grows downwards once mapped to SVG pixels)
    pub y: f64,
}

impl Vector2 {
    /// Origin of the spiral.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// First outer vertex of every Theodorus spiral.
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };

    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    ///
    /// Computed as `sqrt(x*x + y*y)` rather than `hypot`: the two differ in
    /// the last bit for some inputs, and rendered output must stay stable.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Exactly the zero vector (either sign of zero).
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert!(Vector2::ORIGIN.is_zero());
        assert!(Vector2::new(-0.0, 0.0).is_zero());
        assert!(!Vector2::UNIT_X.is_zero());
    }

    #[test]
    fn norm_of_pythagorean_triple() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.norm_squared(), 25.0);
        assert_eq!(v.norm(), 5.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, -1.0);

        assert_eq!(a + b, Vector2::new(5.0, 1.0));
        assert_eq!(a - b, Vector2::new(-3.0, 3.0));
        assert_eq!(a + (-b), a - b);
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
    }

    #[test]
    fn finiteness() {
        assert!(Vector2::new(1.0, -1.0).is_finite());
        assert!(!Vector2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vector2::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(Vector2::new(1.0, 0.5).to_string(), "(1, 0.5)");
    }
}
