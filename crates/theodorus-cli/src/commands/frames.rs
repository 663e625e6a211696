//! `theodorus frames`: cumulative per-level fragments.

use anyhow::{bail, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use theodorus_geometry::SpiralParameters;
use theodorus_svg::{render_frames_with, write_artifact, Frames, Rotation};
use tracing::info;

use crate::args::FrameFormat;

/// What to emit from the rendered frames.
#[derive(Debug, Clone, Copy)]
pub struct FramesOptions {
    pub format: FrameFormat,
    pub level: Option<usize>,
    pub wrap: bool,
    pub rotation: Rotation,
}

/// JSON layout: the parameters that produced the frames, then every level.
#[derive(Serialize)]
struct FramesDocument<'a> {
    parameters: &'a SpiralParameters,
    levels: &'a [String],
}

/// Render and serialize frames according to `options`.
pub fn render(params: &SpiralParameters, options: &FramesOptions) -> Result<String> {
    let frames = render_frames_with(params, &options.rotation)?;

    if let Some(level) = options.level {
        return select_level(&frames, level, options.wrap);
    }

    let text = match options.format {
        FrameFormat::Json => {
            let document = FramesDocument {
                parameters: params,
                levels: frames.as_slice(),
            };
            let mut json = serde_json::to_string_pretty(&document)?;
            json.push('\n');
            json
        }
        FrameFormat::Lines => frames.iter().fold(String::new(), |mut out, fragment| {
            out.push_str(fragment);
            out.push('\n');
            out
        }),
    };
    Ok(text)
}

fn select_level(frames: &Frames, level: usize, wrap: bool) -> Result<String> {
    let last = frames.len() - 1;
    let markup = if wrap {
        frames.wrap(level)
    } else {
        frames.level(level).map(|fragment| format!("{fragment}\n"))
    };
    match markup {
        Some(markup) => Ok(markup),
        None => bail!("level {level} is out of range 0..={last}"),
    }
}

/// Write rendered frames to `output`, or to `stdout` when unset.
pub fn run(
    params: &SpiralParameters,
    options: &FramesOptions,
    output: Option<&Path>,
    stdout: &mut impl Write,
) -> Result<()> {
    super::warn_if_clipped(params)?;
    let text = render(params, options)?;

    match output {
        Some(path) => {
            write_artifact(path, &text)?;
            info!(
                path = %path.display(),
                levels = params.step_count + 1,
                "wrote animation frames"
            );
        }
        None => {
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
