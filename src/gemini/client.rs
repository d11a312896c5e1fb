// Gemini API client over HTTPS
// Author: kelexine (https://github.com/kelexine)

use super::Transport;
use crate::config::{ApiKey, GeminiConfig};
use crate::error::{AnalysisError, Result};
use crate::models::gemini::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the public Gemini `generateContent` API.
///
/// Authenticates with an API key sent in the `x-goog-api-key` header. The key
/// is injected at construction time.
pub struct GeminiTransport {
    http_client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiTransport {
    pub fn new(config: &GeminiConfig, api_key: ApiKey) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| AnalysisError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        let error_resp = serde_json::from_str::<ErrorResponse>(response_text).ok()?;
        let error = error_resp.error?;
        error.message.or(error.status)
    }
}

#[async_trait]
impl Transport for GeminiTransport {
    async fn generate_content(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!("Calling generateContent API for model: {}", model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            let message = sanitize(&message);
            error!("Gemini API error: HTTP {} - {}", status, message);
            return Err(AnalysisError::Transport(format!("HTTP {}: {}", status.as_u16(), message)));
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response envelope: {}", e);
                AnalysisError::Transport(format!("Response parsing error: {}", e))
            })?;

        gemini_response.text().map_err(AnalysisError::Transport)
    }
}
