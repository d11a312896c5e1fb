//! Image input handling for skin analysis.
//!
//! Turns a user-supplied photo (file, raw bytes, or data URL) into the
//! base64 + MIME type payload that Gemini accepts as `inlineData`. Includes
//! MIME type detection and size validation.
//!
//! # Submodules
//!
//! - `models`: Image blob, encoded payload, and format detection.
//! - `encoder`: Async reading and base64 encoding.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod encoder;
pub mod models;

pub use encoder::{encode, encode_with_limit};
pub use models::{EncodedImage, ImageBlob, ImageFormat, MAX_IMAGE_SIZE_BYTES};
