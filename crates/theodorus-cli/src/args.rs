//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Theodorus spiral generator CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "theodorus", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: theodorus.toml, if present)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the spiral as one static SVG document
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        spiral: SpiralArgs,

        /// Output file (default: sqrt.svg)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Render one cumulative, animated fragment per level
    #[command(visible_alias = "f")]
    Frames {
        #[command(flatten)]
        spiral: SpiralArgs,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Output layout
        #[arg(long, value_enum, default_value_t = FrameFormat::Json)]
        format: FrameFormat,

        /// Emit only this level (0..=steps)
        #[arg(short, long)]
        level: Option<usize>,

        /// Wrap the selected level in a root <svg> element
        #[arg(short, long, requires = "level")]
        wrap: bool,

        /// Seconds per full turn of the newest polygon
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Decode base64 metadata and its SVG image from captured tool output
    #[command(visible_alias = "x")]
    Extract {
        /// Captured output text. Reads --input or stdin when omitted.
        text: Option<String>,

        /// File holding the captured output
        #[arg(short, long, conflicts_with = "text", value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        /// Directory receiving out.json and out.svg
        #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
        out_dir: PathBuf,
    },
}

/// Spiral overrides shared by render and frames.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SpiralArgs {
    /// Number of triangles
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Canvas width and height in pixels
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub canvas_size: Option<f64>,

    /// Pixel length of one unit edge (default: canvas size / 6)
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub triangle_scale: Option<f64>,

    /// Horizontal shift of the spiral origin from the canvas center
    #[arg(long, allow_negative_numbers = true)]
    pub offset_x: Option<f64>,

    /// Vertical shift of the spiral origin from the canvas center
    #[arg(long, allow_negative_numbers = true)]
    pub offset_y: Option<f64>,
}

/// Layout of `frames` output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    /// JSON object with the parameters and a `levels` array
    #[default]
    Json,
    /// One fragment per line, level 0 first
    Lines,
}
