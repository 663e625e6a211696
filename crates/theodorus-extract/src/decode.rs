//! Locating and decoding the payload in captured output.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::debug;

use crate::{Error, Result, TokenMetadata, DATA_URI_MARKER};

/// Escaped newline as it appears in a stringified byte dump.
const ESCAPED_NEWLINE: &str = "\\n";

/// Decoded metadata plus the exact bytes it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    /// Raw decoded JSON, written out unchanged.
    pub metadata_bytes: Vec<u8>,
    pub metadata: TokenMetadata,
}

impl Extracted {
    /// Decoded bytes of the embedded image.
    pub fn image(&self) -> Result<Vec<u8>> {
        self.metadata.decode_image()
    }
}

/// Base64 text following the first data URI marker.
///
/// The payload ends at the first `"`, escaped `\n`, or line break,
/// whichever comes first.
pub fn payload(raw: &str) -> Result<&str> {
    let (_, rest) = raw
        .split_once(DATA_URI_MARKER)
        .ok_or(Error::MissingPayload)?;

    let end = [rest.find('"'), rest.find(ESCAPED_NEWLINE), rest.find(['\n', '\r'])]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());
    let payload = rest[..end].trim();

    if payload.is_empty() {
        return Err(Error::MissingPayload);
    }
    Ok(payload)
}

/// Decode and parse the metadata blob embedded in `raw`.
pub fn decode_metadata(raw: &str) -> Result<Extracted> {
    let encoded = payload(raw)?;
    let metadata_bytes = BASE64.decode(encoded)?;
    let metadata: TokenMetadata = serde_json::from_slice(&metadata_bytes)?;

    debug!(
        payload_len = encoded.len(),
        metadata_len = metadata_bytes.len(),
        "decoded token metadata"
    );
    Ok(Extracted {
        metadata_bytes,
        metadata,
    })
}
