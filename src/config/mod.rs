// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{AnalysisError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::with_name(&Self::default_config_path())
                    .required(false)
            )
            // Prefix KBEAUTY_, e.g. KBEAUTY_GEMINI__MODEL
            .add_source(
                Environment::with_prefix("KBEAUTY")
                    .prefix_separator("_")
                    .separator("__")
            )
            .build()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AnalysisError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kbeauty-analyzer")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

/// Gemini API key.
///
/// Passed explicitly into the transport rather than read from ambient
/// process state, so tests can run with fake credentials. The key is wiped
/// from memory on drop and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AnalysisError::Config("API key is empty".to_string()));
        }
        Ok(Self(key.trim().to_string()))
    }

    /// Read the key from the named environment variable.
    ///
    /// A missing key is a startup-time configuration error.
    pub fn from_env(var: &str) -> Result<Self> {
        let value = std::env::var(var).map_err(|_| {
            AnalysisError::Config(format!("{} environment variable not set", var))
        })?;
        Self::new(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}
