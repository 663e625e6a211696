//! `theodorus render`: one static SVG document.

use anyhow::Result;
use std::path::Path;
use theodorus_geometry::SpiralParameters;
use theodorus_svg::{render_document, write_artifact};
use tracing::info;

/// Default artifact name, as produced by the reference figure.
pub const DEFAULT_OUTPUT: &str = "sqrt.svg";

pub fn run(params: &SpiralParameters, output: &Path) -> Result<()> {
    super::warn_if_clipped(params)?;
    let document = render_document(params)?;
    write_artifact(output, &document)?;

    info!(
        path = %output.display(),
        steps = params.step_count,
        bytes = document.len(),
        "wrote spiral document"
    );
    Ok(())
}
