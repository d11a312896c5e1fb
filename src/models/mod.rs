//! Data models for the skin analyzer.
//!
//! - `analysis`: The typed analysis result handed back to callers.
//! - `gemini`: Request/response bodies for the Gemini `generateContent` API.

// Author: kelexine (https://github.com/kelexine)

pub mod analysis;
pub mod gemini;

pub use analysis::{AnalysisResult, Concern, ProductSuggestion, Recommendations};
pub use gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part};
