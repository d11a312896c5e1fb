// kbeauty-analyzer - K-Beauty skin analysis client for the Gemini vision API
// Author: kelexine (https://github.com/kelexine)

pub mod analysis;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod gemini;
pub mod models;
pub mod prompts;
pub mod report;
pub mod schema;
pub mod utils;
pub mod vision;

pub use analysis::AnalysisClient;
pub use error::{AnalysisError, ErrorKind, Result};
pub use models::AnalysisResult;
