//! Skin analysis client.
//!
//! Ties the pieces together: encodes the photo, picks the instruction for
//! the requested language, sends one request with the response schema, and
//! decodes the reply into an [`AnalysisResult`].
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::decode::parse_analysis;
use crate::error::{AnalysisError, Result};
use crate::gemini::Transport;
use crate::models::gemini::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};
use crate::models::AnalysisResult;
use crate::prompts::PromptTable;
use crate::report;
use crate::schema::analysis_schema;
use crate::vision::{self, EncodedImage, ImageBlob, MAX_IMAGE_SIZE_BYTES};
use tracing::{debug, error, info};

/// Runs skin analyses against a [`Transport`].
///
/// Holds no per-request state; one value can serve concurrent callers.
pub struct AnalysisClient<T: Transport> {
    transport: T,
    prompts: PromptTable,
    model: String,
    max_image_bytes: usize,
}

impl<T: Transport> AnalysisClient<T> {
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self {
            transport,
            prompts: PromptTable::default(),
            model: model.into(),
            max_image_bytes: MAX_IMAGE_SIZE_BYTES,
        }
    }

    pub fn with_prompts(mut self, prompts: PromptTable) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_max_image_bytes(mut self, limit: usize) -> Self {
        self.max_image_bytes = limit;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyze a facial photo and return the model's skin assessment.
    ///
    /// Fails with `InvalidInput` before touching the network when no image
    /// is given, and with `Config` for an unsupported language. The result
    /// is all-or-nothing: any encode, transport, or decode failure is
    /// returned as an error.
    pub async fn analyze(&self, image: Option<&ImageBlob>, language: &str) -> Result<AnalysisResult> {
        let image = image.ok_or_else(|| {
            AnalysisError::InvalidInput(report::labels_for(language).error_image.to_string())
        })?;
        let prompt = self.prompts.get(language)?;

        let result = self.run(image, prompt).await;
        match &result {
            Ok(analysis) => info!(
                "Skin analysis complete: type={}, {} concerns",
                analysis.skin_type,
                analysis.concerns.len()
            ),
            Err(e) => error!("Error analyzing skin: {}", e),
        }
        result
    }

    async fn run(&self, image: &ImageBlob, prompt: &str) -> Result<AnalysisResult> {
        debug!("Encoding image");
        let encoded = vision::encode_with_limit(image, self.max_image_bytes).await?;

        debug!(
            "Requesting analysis from {} ({}, {} base64 bytes)",
            self.model,
            encoded.mime_type,
            encoded.data.len()
        );
        let request = build_request(encoded, prompt);
        let text = self.transport.generate_content(&self.model, &request).await?;

        debug!("Decoding {} chars of model output", text.len());
        parse_analysis(&text)
    }
}

/// Build the single-turn request: image, then instruction, with the JSON
/// response schema attached.
pub fn build_request(image: EncodedImage, prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData::from(image),
                },
                Part::text(prompt),
            ],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(analysis_schema()),
        }),
    }
}
