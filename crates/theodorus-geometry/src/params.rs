//! Spiral generation parameters.

use crate::{Error, Result, Vector2};

/// Default number of triangles, matching the reference figure.
pub const DEFAULT_STEP_COUNT: usize = 13;

/// Default canvas edge length in pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 230.0;

/// Canvas edge lengths per unit triangle edge in the reference figure.
pub const DEFAULT_SCALE_DIVISOR: f64 = 6.0;

/// Default `triangle_scale` for a canvas: a sixth of its edge.
pub fn scale_for_canvas(canvas_size: f64) -> f64 {
    canvas_size / DEFAULT_SCALE_DIVISOR
}

/// Inputs for one spiral generation call.
///
/// The canvas and offset only matter once vertices are mapped to pixels;
/// the geometry itself depends on `step_count` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralParameters {
    /// Number of triangles to build.
    pub step_count: usize,
    /// Width and height of the square canvas.
    pub canvas_size: f64,
    /// Pixel length of one unit edge.
    pub triangle_scale: f64,
    /// Shift of the spiral origin away from the canvas center.
    pub center_offset: Vector2,
}

impl Default for SpiralParameters {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            canvas_size: DEFAULT_CANVAS_SIZE,
            triangle_scale: scale_for_canvas(DEFAULT_CANVAS_SIZE),
            center_offset: Vector2::new(0.0, 30.0),
        }
    }
}

impl SpiralParameters {
    /// Parameters for `step_count` triangles on a square canvas, origin centered.
    pub fn new(step_count: usize, canvas_size: f64, triangle_scale: f64) -> Self {
        Self {
            step_count,
            canvas_size,
            triangle_scale,
            center_offset: Vector2::ORIGIN,
        }
    }

    /// Replace the center offset.
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.center_offset = offset;
        self
    }

    /// Check every precondition before anything is computed.
    ///
    /// A zero `step_count` is valid and yields an empty spiral.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(Error::invalid(
                "canvas_size",
                format!("must be finite and positive, got {}", self.canvas_size),
            ));
        }
        if !(self.triangle_scale.is_finite() && self.triangle_scale > 0.0) {
            return Err(Error::invalid(
                "triangle_scale",
                format!("must be finite and positive, got {}", self.triangle_scale),
            ));
        }
        if !self.center_offset.is_finite() {
            return Err(Error::invalid(
                "center_offset",
                format!("must be finite, got {}", self.center_offset),
            ));
        }
        Ok(())
    }

    /// Pixel position of the spiral origin.
    pub fn center(&self) -> Vector2 {
        let half = self.canvas_size / 2.0;
        Vector2::new(half, half) + self.center_offset
    }
}
