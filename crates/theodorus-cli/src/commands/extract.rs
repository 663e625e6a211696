//! `theodorus extract`: decode metadata and image from captured output.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use theodorus_extract::{decode_metadata, Extracted};
use theodorus_svg::write_artifact;
use tracing::{debug, info};

/// Decoded metadata file name.
pub const METADATA_FILE: &str = "out.json";

/// Decoded image file name.
pub const IMAGE_FILE: &str = "out.svg";

/// Captured output from the argument, a file, or `stdin`, in that order.
pub fn read_input(text: Option<String>, input: Option<&Path>, stdin: impl Read) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()));
    }
    std::io::read_to_string(stdin).context("failed to read captured output from stdin")
}

/// Decode `raw`, writing `out.json` and `out.svg` into `out_dir`.
///
/// Both payloads are decoded before either file is written.
pub fn run(raw: &str, out_dir: &Path) -> Result<Extracted> {
    debug!(bytes = raw.len(), "decoding captured output");
    let extracted = decode_metadata(raw).context("failed to decode token metadata")?;
    let image = extracted.image().context("failed to decode metadata image")?;

    let metadata_path = out_dir.join(METADATA_FILE);
    write_artifact(&metadata_path, &extracted.metadata_bytes)?;

    let image_path = out_dir.join(IMAGE_FILE);
    write_artifact(&image_path, &image)?;

    info!(attributes = %extracted.metadata.attributes, "token attributes");
    info!(description = %extracted.metadata.description, "token description");
    info!(
        metadata = %metadata_path.display(),
        image = %image_path.display(),
        "wrote extracted artifacts"
    );
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;

    // {"image":"data:image/svg+xml;base64,PHN2Zy8+","attributes":[],"description":"d"}
    const METADATA_B64: &str =
        "eyJpbWFnZSI6ImRhdGE6aW1hZ2Uvc3ZnK3htbDtiYXNlNjQsUEhOMlp5OCsiLCJhdHRyaWJ1dGVzIjpbXSwiZGVzY3JpcHRpb24iOiJkIn0=";

    #[test]
    fn writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let raw = format!("Logs:\\n  data:application/json;base64,{METADATA_B64}\\n");

        let extracted = run(&raw, dir.path()).unwrap();

        assert_eq!(extracted.metadata.description, "d");
        assert_eq!(
            std::fs::read(dir.path().join(METADATA_FILE)).unwrap(),
            extracted.metadata_bytes
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join(IMAGE_FILE)).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn undecodable_output_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run("nothing to see", dir.path()).is_err());
        assert!(!dir.path().join(METADATA_FILE).exists());
    }

    #[test]
    fn corrupt_image_writes_nothing() {
        // {"image":"data:image/svg+xml;base64,@@@","attributes":[],"description":"d"}
        let metadata =
            "eyJpbWFnZSI6ImRhdGE6aW1hZ2Uvc3ZnK3htbDtiYXNlNjQsQEBAIiwiYXR0cmlidXRlcyI6W10sImRlc2NyaXB0aW9uIjoiZCJ9";
        let dir = tempfile::tempdir().unwrap();
        let raw = format!("data:application/json;base64,{metadata}\\n");

        assert!(run(&raw, dir.path()).is_err());
        assert!(!dir.path().join(METADATA_FILE).exists());
        assert!(!dir.path().join(IMAGE_FILE).exists());
    }

    #[test]
    fn input_precedence() {
        let stdin = "from stdin".as_bytes();
        assert_eq!(read_input(Some("arg".into()), None, stdin).unwrap(), "arg");
        assert_eq!(read_input(None, None, stdin).unwrap(), "from stdin");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "from file").unwrap();
        assert_eq!(read_input(None, Some(&path), stdin).unwrap(), "from file");
    }
}
