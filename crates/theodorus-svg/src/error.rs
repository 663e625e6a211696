//! Error types for theodorus-svg.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for rendering and artifact operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing markup.
#[derive(Debug, Error)]
pub enum Error {
    /// Spiral parameters failed validation; nothing was rendered.
    #[error(transparent)]
    InvalidParameter(#[from] theodorus_geometry::Error),

    /// The output artifact could not be written.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
