// Per-language analysis instructions
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AnalysisError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

pub const ENGLISH_PROMPT: &str = "You are an expert K-Beauty dermatologist. Analyze this user's facial photo, taken with a back camera and flash, based on Korean beauty standards. Provide a detailed analysis and personalized recommendations. Return the analysis as a JSON object matching the provided schema.";

pub const TURKISH_PROMPT: &str = "Sen uzman bir K-Beauty dermatoloğusun. Kullanıcının arka kamera ve flaşla çekilmiş bu yüz fotoğrafını Kore güzellik standartlarına göre analiz et. Detaylı bir analiz ve kişiselleştirilmiş öneriler sun. Analizi, sağlanan şemayla eşleşen bir JSON nesnesi olarak döndür.";

/// Lazily initialized built-in prompts
static DEFAULT_PROMPTS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn get_default_prompts() -> &'static HashMap<&'static str, &'static str> {
    DEFAULT_PROMPTS.get_or_init(|| {
        let mut m = HashMap::new();
        m.insert("en", ENGLISH_PROMPT);
        m.insert("tr", TURKISH_PROMPT);
        m
    })
}

/// Instruction text keyed by language tag.
///
/// Starts with the built-in `en` and `tr` prompts; more languages can be
/// added with [`PromptTable::with_prompt`].
#[derive(Debug, Clone)]
pub struct PromptTable {
    prompts: HashMap<String, String>,
}

impl Default for PromptTable {
    fn default() -> Self {
        Self {
            prompts: get_default_prompts()
                .iter()
                .map(|(tag, prompt)| (tag.to_string(), prompt.to_string()))
                .collect(),
        }
    }
}

impl PromptTable {
    /// An empty table, for callers that supply every language themselves.
    pub fn empty() -> Self {
        Self { prompts: HashMap::new() }
    }

    /// Add or replace the prompt for `tag`.
    pub fn with_prompt(mut self, tag: &str, prompt: impl Into<String>) -> Self {
        self.prompts.insert(normalize_tag(tag), prompt.into());
        self
    }

    /// Look up the prompt for a language tag.
    ///
    /// Tags are matched case-insensitively after trimming. An unknown tag is
    /// a configuration error at the call site.
    pub fn get(&self, tag: &str) -> Result<&str> {
        self.prompts
            .get(&normalize_tag(tag))
            .map(String::as_str)
            .ok_or_else(|| {
                AnalysisError::Config(format!(
                    "Unsupported language: {}. Supported languages: {}",
                    tag,
                    self.languages().join(", ")
                ))
            })
    }

    pub fn supports(&self, tag: &str) -> bool {
        self.prompts.contains_key(&normalize_tag(tag))
    }

    /// Supported tags, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.prompts.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_languages() {
        let table = PromptTable::default();
        assert_eq!(table.get("en").unwrap(), ENGLISH_PROMPT);
        assert_eq!(table.get("tr").unwrap(), TURKISH_PROMPT);
        assert_eq!(table.languages(), vec!["en", "tr"]);
    }

    #[test]
    fn test_tag_normalization() {
        let table = PromptTable::default();
        assert_eq!(table.get(" EN ").unwrap(), ENGLISH_PROMPT);
    }

    #[test]
    fn test_unknown_language() {
        let err = PromptTable::default().get("ko").unwrap_err();
        assert!(err.to_string().contains("Unsupported language: ko"));
        assert!(err.to_string().contains("en, tr"));
    }

    #[test]
    fn test_extension() {
        let table = PromptTable::default().with_prompt("ko", "피부를 분석하세요.");
        assert!(table.supports("ko"));
        assert_eq!(table.get("ko").unwrap(), "피부를 분석하세요.");
        assert_eq!(table.get("en").unwrap(), ENGLISH_PROMPT);
    }

    #[test]
    fn test_empty_table() {
        assert!(PromptTable::empty().languages().is_empty());
    }
}
