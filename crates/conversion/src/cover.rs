//! Cover image decoding and classification

use crate::error::{ConversionError, ConversionResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Image format detected from a cover's leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverFormat {
    /// PNG
    Png,
    /// JPEG
    Jpeg,
    /// Anything else
    Unknown,
}

impl CoverFormat {
    /// Classify by signature
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(PNG_SIGNATURE) {
            CoverFormat::Png
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            CoverFormat::Jpeg
        } else {
            CoverFormat::Unknown
        }
    }

    /// MIME type string
    pub fn mime(&self) -> &'static str {
        match self {
            CoverFormat::Png => "image/png",
            CoverFormat::Jpeg => "image/jpeg",
            CoverFormat::Unknown => "application/octet-stream",
        }
    }

    /// Whether playlists accept this format as a cover
    pub fn is_supported(&self) -> bool {
        matches!(self, CoverFormat::Png | CoverFormat::Jpeg)
    }
}

/// Decode a base64 cover, accepting an optional `data:...;base64,` prefix
pub fn decode_base64_image(image: &str) -> ConversionResult<Vec<u8>> {
    let payload = match image.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| ConversionError::InvalidBase64("data URL without payload".to_string()))?,
        None => image,
    };
    BASE64
        .decode(payload.trim())
        .map_err(|e| ConversionError::InvalidBase64(e.to_string()))
}
