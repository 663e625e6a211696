//! Error types for theodorus-extract.

use thiserror::Error;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding captured output.
#[derive(Debug, Error)]
pub enum Error {
    /// No `base64,` marker in the captured text.
    #[error("no base64 payload found in captured output")]
    MissingPayload,

    /// The metadata `image` field is not a base64 data URI.
    #[error("metadata image is not a base64 data URI")]
    MissingImage,

    /// Payload is not valid standard base64.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded metadata is not the expected JSON object.
    #[error("metadata JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
