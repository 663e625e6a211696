//! Token metadata carried in the decoded payload.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, DATA_URI_MARKER};

/// The three metadata fields this tool interprets.
///
/// Unknown fields are ignored; all three listed here are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// `data:image/svg+xml;base64,...` URI of the rendered image.
    pub image: String,
    /// Trait list, kept as raw JSON.
    pub attributes: serde_json::Value,
    /// Free-form description.
    pub description: String,
}

impl TokenMetadata {
    /// Base64 text of the image, after the data URI marker.
    pub fn image_payload(&self) -> Result<&str> {
        self.image
            .split_once(DATA_URI_MARKER)
            .map(|(_, encoded)| encoded)
            .ok_or(Error::MissingImage)
    }

    /// Decoded image bytes (SVG source for the reference renderer).
    pub fn decode_image(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(self.image_payload()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(image: &str) -> TokenMetadata {
        TokenMetadata {
            image: image.to_string(),
            attributes: json!([]),
            description: String::new(),
        }
    }

    #[test]
    fn decodes_svg_data_uri() {
        let svg = "<svg></svg>";
        let image = format!("data:image/svg+xml;base64,{}", BASE64.encode(svg));
        assert_eq!(metadata(&image).decode_image().unwrap(), svg.as_bytes());
    }

    #[test]
    fn plain_url_is_not_an_image_payload() {
        let err = metadata("https://example.com/a.svg").decode_image().unwrap_err();
        assert!(matches!(err, Error::MissingImage));
    }

    #[test]
    fn corrupt_image_is_base64_error() {
        let err = metadata("data:image/svg+xml;base64,@@@").decode_image().unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }

    #[test]
    fn ignores_unknown_fields() {
        let parsed: TokenMetadata = serde_json::from_value(json!({
            "name": "Optimizor",
            "image": "data:image/svg+xml;base64,",
            "attributes": [{"trait_type": "Level", "value": 3}],
            "description": "spiral",
        }))
        .unwrap();
        assert_eq!(parsed.description, "spiral");
        assert_eq!(parsed.attributes[0]["value"], 3);
    }

    #[test]
    fn missing_description_is_rejected() {
        let parsed = serde_json::from_value::<TokenMetadata>(json!({
            "image": "data:image/svg+xml;base64,",
            "attributes": [],
        }));
        assert!(parsed.is_err());
    }
}
