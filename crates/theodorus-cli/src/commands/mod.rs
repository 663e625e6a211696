//! Subcommand implementations.

pub mod extract;
pub mod frames;
pub mod render;

use theodorus_geometry::SpiralParameters;
use theodorus_svg::Triangle;
use tracing::warn;

/// Whether every vertex lands on the canvas.
pub fn fits_canvas(params: &SpiralParameters, triangles: &[Triangle]) -> bool {
    let limit = params.canvas_size;
    let on_canvas = |c: i64| c >= 0 && c as f64 <= limit;
    triangles
        .iter()
        .flat_map(|t| t.0)
        .all(|p| on_canvas(p.x) && on_canvas(p.y))
}

/// Warn when part of the spiral would be drawn off-canvas.
pub fn warn_if_clipped(params: &SpiralParameters) -> theodorus_svg::Result<()> {
    let triangles = theodorus_svg::triangles(params)?;
    if !fits_canvas(params, &triangles) {
        warn!(
            steps = params.step_count,
            canvas = params.canvas_size,
            scale = params.triangle_scale,
            "spiral extends past the canvas edge"
        );
    }
    Ok(())
}
