//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `PerplexityProvider` - Perplexity (OpenAI-compatible chat completions)

mod mock_provider;
mod perplexity_provider;

pub use mock_provider::{MockAIProvider, MockResponse};
pub use perplexity_provider::{PerplexityConfig, PerplexityProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

use std::sync::Arc;

use crate::config::AiConfig;
use crate::ports::AIProvider;

/// Builds the remote summarizer from configuration.
///
/// Returns `None` when no API key is configured or the client cannot be
/// built; the simplifier then works offline.
pub fn provider_from_config(config: &AiConfig) -> Option<Arc<dyn AIProvider>> {
    let api_key = config.api_key.as_deref().filter(|k| !k.trim().is_empty())?;

    let provider_config = PerplexityConfig::new(api_key)
        .with_model(config.model.clone())
        .with_base_url(config.base_url.clone())
        .with_timeout(config.timeout())
        .with_max_retries(config.max_retries);

    match PerplexityProvider::new(provider_config) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            tracing::warn!(error = %e, "remote summarizer unavailable, continuing offline");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_means_no_provider() {
        assert!(provider_from_config(&AiConfig::default()).is_none());

        let blank = AiConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(provider_from_config(&blank).is_none());
    }

    #[test]
    fn key_builds_perplexity_provider() {
        let config = AiConfig {
            api_key: Some("pplx-test".to_string()),
            model: "sonar-small".to_string(),
            ..Default::default()
        };
        let provider = provider_from_config(&config).unwrap();
        let info = provider.provider_info();
        assert_eq!(info.name, "perplexity");
        assert_eq!(info.model, "sonar-small");
    }
}
