//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NEUROLEARN` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields an offline
//! engine with the profile stored under `./data`.
//!
//! # Example
//!
//! ```no_run
//! use neurolearn::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Remote summarizer configured: {}", config.ai.has_remote());
//! ```

mod ai;
mod error;
mod logging;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote summarizer (Perplexity) configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Profile persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NEUROLEARN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NEUROLEARN__AI__API_KEY=pplx-...` -> `ai.api_key = ...`
    /// - `NEUROLEARN__STORAGE__PROFILE_PATH=/tmp/p.json` -> `storage.profile_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NEUROLEARN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("NEUROLEARN__AI__API_KEY");
        env::remove_var("NEUROLEARN__AI__TIMEOUT_SECS");
        env::remove_var("NEUROLEARN__STORAGE__PROFILE_PATH");
        env::remove_var("NEUROLEARN__LOGGING__LEVEL");
        env::remove_var("NEUROLEARN__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.ai.has_remote());
        assert_eq!(config.ai.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NEUROLEARN__AI__API_KEY", "pplx-test");
        env::set_var("NEUROLEARN__AI__TIMEOUT_SECS", "12");
        env::set_var("NEUROLEARN__STORAGE__PROFILE_PATH", "/tmp/learner.json");
        env::set_var("NEUROLEARN__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_remote());
        assert_eq!(config.ai.timeout_secs, 12);
        assert_eq!(
            config.storage.profile_path,
            PathBuf::from("/tmp/learner.json")
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NEUROLEARN__AI__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
