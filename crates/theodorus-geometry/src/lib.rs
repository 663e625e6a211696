//! Theodorus Spiral Geometry
//!
//! Discrete square-root spiral built from right triangles with a shared apex.
//!
//! # Mathematical Foundation
//!
//! Starting from the unit vector `(1, 0)`, each step attaches a unit-length
//! segment perpendicular to the current outer vertex:
//!
//! ```text
//! h    = sqrt(x² + y²)
//! next = (x - y/h, y + x/h)
//! ```
//!
//! so `|next|² = |base|² + 1` and the `i`-th outer vertex lies at `√(i + 2)`.
//!
//! # Usage
//!
//! ```
//! use theodorus_geometry::{generate, Vector2};
//!
//! let steps = generate(13);
//! assert_eq!(steps.len(), 13);
//! assert_eq!(steps[0].base_vertex, Vector2::UNIT_X);
//! assert_eq!(steps[1].base_vertex, steps[0].next_vertex);
//! ```
//!
//! All geometry is in unit space; scaling, translation and rounding belong
//! to the renderer.

mod error;
mod params;
mod spiral;
mod vector;

pub use error::{Error, Result};
pub use params::{
    scale_for_canvas, SpiralParameters, DEFAULT_CANVAS_SIZE, DEFAULT_SCALE_DIVISOR,
    DEFAULT_STEP_COUNT,
};
pub use spiral::{extent, generate, hypotenuse, next_vertex, SpiralStep, Theodorus};
pub use vector::Vector2;
