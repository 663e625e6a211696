//! Writing rendered output to disk.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// One create, write, flush sequence; the handle is released on every
/// return path. Failures are reported once, without retry.
pub fn write_artifact(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let contents = contents.as_ref();
    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(contents).map_err(io_error)?;
    file.flush().map_err(io_error)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
