//! Remote summarizer configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote summarizer configuration
///
/// No API key means the engine runs offline; that is not a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Perplexity (or compatible) API key
    pub api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Chat-completions base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on waiting for a summary, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a remote summarizer is configured
    pub fn has_remote(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("NEUROLEARN__AI__MODEL"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "mistral-7b-instruct".to_string()
}

fn default_base_url() -> String {
    "https://api.perplexity.ai".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    1
}
