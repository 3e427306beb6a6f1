//! Environment-driven configuration
//!
//! All settings come from process environment variables. The CLI loads a
//! `.env` file before calling [`AppConfig::from_env`], so local development
//! works the same way as the deployed binary.

use crate::error::{BridgeError, Result};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro-exp-03-25";

/// Environment variable holding the Gemini API key.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Environment variable holding the SerpAPI key forwarded to the flight
/// search tool server.
pub const SERP_API_KEY_VAR: &str = "SERP_API_KEY";
/// Optional model override.
pub const GEMINI_MODEL_VAR: &str = "GEMINI_MODEL";

/// Runtime configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key (required)
    pub google_api_key: String,
    /// SerpAPI key, required only by the flight search preset
    pub serp_api_key: Option<String>,
    /// Model identifier, `GEMINI_MODEL` or [`DEFAULT_MODEL`]
    pub model: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Fails fast with a descriptive error when `GOOGLE_API_KEY` is absent,
    /// before any tool server subprocess is spawned.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let google_api_key = lookup(GOOGLE_API_KEY_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(BridgeError::MissingEnv(GOOGLE_API_KEY_VAR))?;

        let serp_api_key = lookup(SERP_API_KEY_VAR).filter(|v| !v.is_empty());

        let model = lookup(GEMINI_MODEL_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            google_api_key,
            serp_api_key,
            model,
        })
    }

    /// SerpAPI key or a `MissingEnv` error naming the variable.
    pub fn require_serp_api_key(&self) -> Result<&str> {
        self.serp_api_key
            .as_deref()
            .ok_or(BridgeError::MissingEnv(SERP_API_KEY_VAR))
    }
}
