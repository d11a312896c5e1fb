// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An image handed to the analyzer, before encoding.
#[derive(Debug, Clone)]
pub enum ImageBlob {
    /// Image file on disk; read asynchronously at encode time.
    File(PathBuf),
    /// Raw bytes with the MIME type declared by whoever produced them.
    Bytes { data: Vec<u8>, mime_type: String },
    /// `data:<mime>;base64,<payload>` URL, as produced by browser file readers.
    DataUrl(String),
}

impl ImageBlob {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        ImageBlob::File(path.as_ref().to_path_buf())
    }
}

/// Transport-ready image payload (base64 data + MIME type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    pub data: String,
    pub mime_type: String,
}

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Heic,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Heic => "image/heic",
        }
    }

    /// Try to detect format from MIME type
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            "image/gif" => Some(ImageFormat::Gif),
            "image/heic" => Some(ImageFormat::Heic),
            _ => None,
        }
    }

    /// Guess format from a file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "webp" => Some(ImageFormat::WebP),
            "gif" => Some(ImageFormat::Gif),
            "heic" | "heif" => Some(ImageFormat::Heic),
            _ => None,
        }
    }

    /// Detect format from magic bytes at start of image data
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"\xFF\xD8\xFF") {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if data.len() >= 12 && data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
            Some(ImageFormat::WebP)
        } else if data.len() >= 12 && (data[4..12] == *b"ftypheic" || data[4..12] == *b"ftypheix") {
            Some(ImageFormat::Heic)
        } else {
            None
        }
    }
}

/// Validation limits
pub const MAX_IMAGE_SIZE_BYTES: usize = 20 * 1024 * 1024; // 20MB (Gemini inline limit)

/// Validate image data size
pub fn validate_image_size(data_len: usize, limit: usize) -> Result<(), String> {
    if data_len == 0 {
        return Err("Image is empty".to_string());
    }
    if data_len > limit {
        return Err(format!(
            "Image size {} bytes exceeds maximum of {} bytes",
            data_len, limit
        ));
    }
    Ok(())
}
