//! Generator configuration from `theodorus.toml`.
//!
//! # Example
//!
//! ```toml
//! [spiral]
//! steps = 13
//! canvas_size = 230.0
//! triangle_scale = 28.75     # default: canvas_size / 6
//! center_offset = [0.0, 30.0]
//!
//! [frames]
//! duration_secs = 10
//! ```
//!
//! Every key is optional. Command-line flags override file values, and the
//! merged parameters are validated before anything is rendered.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use theodorus_geometry::{
    scale_for_canvas, SpiralParameters, Vector2, DEFAULT_CANVAS_SIZE, DEFAULT_STEP_COUNT,
};
use theodorus_svg::Rotation;
use thiserror::Error;
use tracing::debug;

use crate::args::SpiralArgs;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "theodorus.toml";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// Root configuration structure representing theodorus.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spiral geometry and canvas
    pub spiral: SpiralSection,
    /// Animation frame settings
    pub frames: FramesSection,
}

/// `[spiral]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpiralSection {
    pub steps: usize,
    pub canvas_size: f64,
    /// Unset means a sixth of the canvas.
    pub triangle_scale: Option<f64>,
    pub center_offset: [f64; 2],
}

impl Default for SpiralSection {
    fn default() -> Self {
        let reference = SpiralParameters::default();
        Self {
            steps: DEFAULT_STEP_COUNT,
            canvas_size: DEFAULT_CANVAS_SIZE,
            triangle_scale: None,
            center_offset: [reference.center_offset.x, reference.center_offset.y],
        }
    }
}

/// `[frames]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramesSection {
    /// Seconds per full turn of the newest polygon.
    pub duration_secs: u32,
}

impl Default for FramesSection {
    fn default() -> Self {
        Self {
            duration_secs: Rotation::default().duration_secs,
        }
    }
}

impl Config {
    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path`, or `theodorus.toml` when present, or defaults.
    ///
    /// An explicitly named file must exist; the implicit one may not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Merge command-line overrides over file values.
    pub fn spiral_parameters(&self, args: &SpiralArgs) -> SpiralParameters {
        let section = &self.spiral;
        let canvas_size = args.canvas_size.unwrap_or(section.canvas_size);
        let triangle_scale = args
            .triangle_scale
            .or(section.triangle_scale)
            .unwrap_or_else(|| scale_for_canvas(canvas_size));
        let [dx, dy] = section.center_offset;

        SpiralParameters {
            step_count: args.steps.unwrap_or(section.steps),
            canvas_size,
            triangle_scale,
            center_offset: Vector2::new(args.offset_x.unwrap_or(dx), args.offset_y.unwrap_or(dy)),
        }
    }

    /// Rotation for animated frames, with an optional duration override.
    pub fn rotation(&self, duration: Option<u32>) -> Rotation {
        Rotation {
            duration_secs: duration.unwrap_or(self.frames.duration_secs),
            ..Rotation::default()
        }
    }
}
