// Gemini API transport module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::GeminiTransport;

use crate::error::Result;
use crate::models::gemini::GenerateContentRequest;
use async_trait::async_trait;

/// The seam between the analysis client and the hosted model.
///
/// Implementations send one `generateContent` request and return the
/// model's answer text, unparsed.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn generate_content(&self, model: &str, request: &GenerateContentRequest) -> Result<String>;
}
