//! Theodorus Spiral SVG Rendering
//!
//! Turns spiral geometry into SVG markup, in one of two modes.
//!
//! # Modes
//!
//! - **Static**: [`render_document`] produces one standalone document with a
//!   background card and every triangle outline.
//! - **Animated**: [`render_frames`] produces `step_count + 1` cumulative
//!   fragments, one per level, where the newest triangle spins around the
//!   spiral origin. Fragments carry no `<svg>` wrapper.
//!
//! # Usage
//!
//! ```
//! use theodorus_geometry::SpiralParameters;
//! use theodorus_svg::render_frames;
//!
//! let params = SpiralParameters::new(13, 230.0, 230.0 / 8.0);
//! let frames = render_frames(&params).unwrap();
//! assert_eq!(frames.len(), 14);
//! assert!(frames.level(0).unwrap().starts_with("<rect"));
//! ```
//!
//! Pixel coordinates are rounded half-to-even; see [`mapping`].

mod artifact;
pub mod element;
mod error;
mod frames;
pub mod mapping;
mod render;

pub use artifact::write_artifact;
pub use element::{Repeat, Rotation};
pub use error::{Error, Result};
pub use frames::Frames;
pub use mapping::{round_pixel, PixelMapper, PixelPoint, Triangle};
pub use render::{render_document, render_frames, render_frames_with, triangles};
