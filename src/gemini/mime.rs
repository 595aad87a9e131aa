//! Helpers for callers that start from raw image bytes instead of a
//! pre-encoded base64 string.

use super::types::InlineData;

pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), falling back to image/png",
                &bytes[..bytes.len().min(4)]
            );
            "image/png"
        }
    }
}

impl InlineData {
    /// Base64-encode raw image bytes and sniff the MIME type from the magic
    /// bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use base64::Engine as _;

        Self {
            mime_type: detect_image_mime(bytes).to_string(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}
