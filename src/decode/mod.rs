// Defensive decoding of the model's text response
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AnalysisError, Result};
use crate::models::AnalysisResult;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Lazily initialized regexes for markdown code fences
static OPENING_FENCE: OnceLock<Regex> = OnceLock::new();
static CLOSING_FENCE: OnceLock<Regex> = OnceLock::new();

fn get_opening_fence() -> &'static Regex {
    OPENING_FENCE.get_or_init(|| {
        Regex::new(r"^```[A-Za-z0-9_+-]*[ \t]*\r?\n?").expect("Invalid regex pattern")
    })
}

fn get_closing_fence() -> &'static Regex {
    CLOSING_FENCE.get_or_init(|| Regex::new(r"\r?\n?```$").expect("Invalid regex pattern"))
}

/// Strip one surrounding markdown code fence, if present.
///
/// Trims whitespace, then removes at most one leading fence (with an
/// optional language tag such as `json`) and at most one trailing fence.
/// Text without fences is returned trimmed and otherwise untouched.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let start = get_opening_fence()
        .find(trimmed)
        .map(|m| m.end())
        .unwrap_or(0);
    let body = &trimmed[start..];

    let end = get_closing_fence()
        .find(body)
        .map(|m| m.start())
        .unwrap_or(body.len());

    body[..end].trim()
}

/// Decode the model's response text into an [`AnalysisResult`].
///
/// Either the whole result decodes and validates, or a
/// [`AnalysisError::Decode`] is returned.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult> {
    let cleaned = strip_code_fence(text);
    if cleaned.len() != text.trim().len() {
        debug!("Stripped markdown fence from model response");
    }

    if cleaned.is_empty() {
        return Err(AnalysisError::Decode("Response is empty".to_string()));
    }

    let result: AnalysisResult = serde_json::from_str(cleaned)?;
    result.validate().map_err(AnalysisError::Decode)?;

    Ok(result)
}
