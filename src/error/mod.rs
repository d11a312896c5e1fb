// Error types for kbeauty-analyzer
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to analyze skin. Gemini API error: {0}")]
    Transport(String),

    #[error("Failed to decode analysis: {0}")]
    Decode(String),
}

/// Coarse classification of an [`AnalysisError`], for callers that branch on
/// the failure category rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Input,
    Io,
    Transport,
    Decode,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Config(_) => ErrorKind::Configuration,
            AnalysisError::InvalidInput(_) => ErrorKind::Input,
            AnalysisError::Io(_) => ErrorKind::Io,
            AnalysisError::Transport(_) => ErrorKind::Transport,
            AnalysisError::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport(format!("HTTP error: {}", err))
    }
}

impl From<config::ConfigError> for AnalysisError {
    fn from(err: config::ConfigError) -> Self {
        AnalysisError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
