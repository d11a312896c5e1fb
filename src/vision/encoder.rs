// Image encoding for inline upload
// Author: kelexine (https://github.com/kelexine)

use super::models::{validate_image_size, EncodedImage, ImageBlob, ImageFormat, MAX_IMAGE_SIZE_BYTES};
use crate::error::{AnalysisError, Result};
use base64::Engine;
use tracing::debug;

/// Encode an image blob into a base64 payload tagged with its MIME type.
///
/// Uses the default 20MB size limit. See [`encode_with_limit`].
pub async fn encode(blob: &ImageBlob) -> Result<EncodedImage> {
    encode_with_limit(blob, MAX_IMAGE_SIZE_BYTES).await
}

/// Encode an image blob, rejecting payloads larger than `limit` bytes.
///
/// Files are read fully into memory. Data URLs have their
/// `data:<mime>;base64,` prefix stripped and are re-validated, never
/// re-encoded.
pub async fn encode_with_limit(blob: &ImageBlob, limit: usize) -> Result<EncodedImage> {
    let encoded = match blob {
        ImageBlob::File(path) => {
            // Reject oversized files before buffering them
            let len = tokio::fs::metadata(path).await?.len();
            if len > limit as u64 {
                return Err(AnalysisError::InvalidInput(format!(
                    "Image size {} bytes exceeds maximum of {} bytes",
                    len, limit
                )));
            }

            let data = tokio::fs::read(path).await?;
            debug!("Read {} bytes from {}", data.len(), path.display());

            let format = ImageFormat::from_extension(path)
                .or_else(|| ImageFormat::sniff(&data))
                .ok_or_else(|| {
                    AnalysisError::InvalidInput(format!(
                        "Could not detect image format of {}",
                        path.display()
                    ))
                })?;

            encode_bytes(&data, format.mime_type(), limit)?
        }
        ImageBlob::Bytes { data, mime_type } => encode_bytes(data, mime_type, limit)?,
        ImageBlob::DataUrl(url) => decode_data_url(url, limit)?,
    };

    Ok(encoded)
}

fn encode_bytes(data: &[u8], mime_type: &str, limit: usize) -> Result<EncodedImage> {
    let format = ImageFormat::from_mime_type(mime_type).ok_or_else(|| {
        AnalysisError::InvalidInput(format!("Unsupported image format: {}", mime_type))
    })?;

    validate_image_size(data.len(), limit).map_err(AnalysisError::InvalidInput)?;

    Ok(EncodedImage {
        data: base64::engine::general_purpose::STANDARD.encode(data),
        mime_type: format.mime_type().to_string(),
    })
}

fn decode_data_url(url: &str, limit: usize) -> Result<EncodedImage> {
    let (header, payload) = url.split_once(',').ok_or_else(|| {
        AnalysisError::InvalidInput("Malformed data URL: missing ',' separator".to_string())
    })?;

    let mime_type = header
        .strip_prefix("data:")
        .and_then(|rest| rest.strip_suffix(";base64"))
        .ok_or_else(|| {
            AnalysisError::InvalidInput("Data URL must be of the form data:<mime>;base64,<data>".to_string())
        })?;

    let format = ImageFormat::from_mime_type(mime_type).ok_or_else(|| {
        AnalysisError::InvalidInput(format!("Unsupported image format: {}", mime_type))
    })?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| AnalysisError::InvalidInput(format!("Invalid base64 image data: {}", e)))?;

    validate_image_size(decoded.len(), limit).map_err(AnalysisError::InvalidInput)?;

    // Gemini expects the bare payload, without the "data:...;base64," prefix
    Ok(EncodedImage {
        data: payload.trim().to_string(),
        mime_type: format.mime_type().to_string(),
    })
}
