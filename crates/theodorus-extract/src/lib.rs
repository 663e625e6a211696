//! Token Metadata Extraction
//!
//! Pulls a `data:application/json;base64,...` blob out of captured tool
//! output and decodes it:
//!
//! 1. take the text after the first `base64,` marker, up to the first quote
//!    or newline ([`payload`]);
//! 2. base64-decode it into JSON metadata ([`decode_metadata`]);
//! 3. base64-decode the metadata's `image` data URI into SVG bytes
//!    ([`TokenMetadata::decode_image`]).
//!
//! Running the tool that produces the output is the caller's business; this
//! crate only ever sees its text.

mod decode;
mod error;
mod metadata;

pub use decode::{decode_metadata, payload, Extracted};
pub use error::{Error, Result};
pub use metadata::TokenMetadata;

/// Separator between a data URI's media type and its base64 body.
pub const DATA_URI_MARKER: &str = "base64,";
