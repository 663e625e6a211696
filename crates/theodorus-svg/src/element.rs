//! Markup templates, one per element kind.
//!
//! Every byte of SVG this crate emits is formatted here. Canvas lengths use
//! `f64`'s `Display`, so integral sizes print without a fraction (`230`).

use std::fmt;

use crate::mapping::Triangle;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Corner radius of the background card.
pub const BACKGROUND_RADIUS: &str = "18px";

/// Semi-transparent background fill.
pub const BACKGROUND_FILL: &str = "rgba(0,0,0,0.1)";

/// Stroke color of every triangle outline.
pub const STROKE: &str = "white";

/// How many times an animation cycle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Loop forever.
    #[default]
    Indefinite,
    /// Run a fixed number of cycles.
    Count(u32),
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repeat::Indefinite => f.write_str("indefinite"),
            Repeat::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Full-turn rotation attached to the newest polygon of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Seconds per full turn.
    pub duration_secs: u32,
    pub repeat: Repeat,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            duration_secs: 10,
            repeat: Repeat::Indefinite,
        }
    }
}

/// Root element start tag, followed by a newline.
pub fn document_open(canvas: f64) -> String {
    format!(
        "<svg height=\"{canvas}\" width=\"{canvas}\" xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\">\n"
    )
}

/// Root element end tag, followed by a newline.
pub fn document_close() -> &'static str {
    "</svg>\n"
}

/// Rounded background rectangle covering the canvas.
pub fn background(canvas: f64) -> String {
    format!(
        "<rect width=\"{canvas}\" height=\"{canvas}\" rx=\"{BACKGROUND_RADIUS}\" ry=\"{BACKGROUND_RADIUS}\" fill=\"{BACKGROUND_FILL}\" />"
    )
}

/// Unfilled triangle outline.
pub fn polygon(triangle: &Triangle) -> String {
    format!("<polygon points=\"{triangle}\" fill=\"none\" stroke=\"{STROKE}\"/>")
}

/// Triangle outline spinning a full turn around its first corner.
pub fn animated_polygon(triangle: &Triangle, rotation: &Rotation) -> String {
    let pivot = triangle.pivot();
    format!(
        "<polygon points=\"{triangle}\" fill=\"none\" stroke=\"{STROKE}\">\
         <animateTransform attributeName=\"transform\" type=\"rotate\" \
         from=\"0 {px} {py}\" to=\"360 {px} {py}\" dur=\"{dur}s\" repeatCount=\"{repeat}\"/>\
         </polygon>",
        px = pivot.x,
        py = pivot.y,
        dur = rotation.duration_secs,
        repeat = rotation.repeat,
    )
}
