//! Unit geometry to pixel space.
//!
//! `pixel = center + triangle_scale * v`, then each coordinate is rounded
//! half-to-even to an integer. Half-to-even is what the reference renderer
//! produced, and every byte of output depends on it.

use std::fmt;

use theodorus_geometry::{SpiralParameters, SpiralStep, Vector2};

/// Round a pixel coordinate, ties to even (`0.5 -> 0`, `1.5 -> 2`).
#[inline]
pub fn round_pixel(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Formats as `x,y`, the SVG `points` pair syntax.
impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A spiral triangle in pixel space, corners in origin/base/next order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub [PixelPoint; 3]);

impl Triangle {
    /// Rotation pivot: the first corner, i.e. the mapped spiral origin.
    pub fn pivot(&self) -> PixelPoint {
        self.0[0]
    }
}

/// Formats as the space-separated `points` attribute value.
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a} {b} {c}")
    }
}

/// Maps unit-space vertices onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapper {
    center: Vector2,
    scale: f64,
}

impl PixelMapper {
    pub fn new(params: &SpiralParameters) -> Self {
        Self {
            center: params.center(),
            scale: params.triangle_scale,
        }
    }

    /// Unrounded pixel position.
    #[inline]
    pub fn project(&self, v: Vector2) -> Vector2 {
        self.center + v * self.scale
    }

    /// Rounded pixel position.
    pub fn map(&self, v: Vector2) -> PixelPoint {
        let p = self.project(v);
        PixelPoint::new(round_pixel(p.x), round_pixel(p.y))
    }

    pub fn triangle(&self, step: &SpiralStep) -> Triangle {
        Triangle(step.vertices().map(|v| self.map(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theodorus_geometry::generate;

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(round_pixel(0.5), 0);
        assert_eq!(round_pixel(1.5), 2);
        assert_eq!(round_pixel(2.5), 2);
        assert_eq!(round_pixel(143.75), 144);
        assert_eq!(round_pixel(-2.5), -2);
        assert_eq!(round_pixel(-0.4), 0);
        assert_eq!(round_pixel(152.49), 152);
    }

    #[test]
    fn origin_maps_to_center() {
        let params = SpiralParameters::new(13, 230.0, 230.0 / 8.0);
        let mapper = PixelMapper::new(&params);
        assert_eq!(mapper.map(Vector2::ORIGIN), PixelPoint::new(115, 115));

        let shifted = PixelMapper::new(&SpiralParameters::default());
        assert_eq!(shifted.map(Vector2::ORIGIN), PixelPoint::new(115, 145));
    }

    #[test]
    fn first_triangle_in_pixels() {
        let params = SpiralParameters::new(1, 230.0, 230.0 / 8.0);
        let mapper = PixelMapper::new(&params);
        let triangle = mapper.triangle(&generate(1)[0]);

        assert_eq!(
            triangle.0,
            [
                PixelPoint::new(115, 115),
                PixelPoint::new(144, 115),
                PixelPoint::new(144, 144),
            ]
        );
        assert_eq!(triangle.pivot(), PixelPoint::new(115, 115));
        assert_eq!(triangle.to_string(), "115,115 144,115 144,144");
    }

    #[test]
    fn negative_coordinates_format_with_sign() {
        assert_eq!(PixelPoint::new(-3, 7).to_string(), "-3,7");
    }
}
