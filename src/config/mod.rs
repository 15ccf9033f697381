//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WORD_COUNT` prefix and nested values use double underscores as separators.
//!
//! Configuration is read once per cold start and never mutated afterwards.
//!
//! # Example
//!
//! ```no_run
//! use word_count_notifier::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Publishing to {}", config.notification.topic_arn);
//! ```

mod aws;
mod error;
mod logging;
mod notification;

pub use aws::AwsConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};
pub use notification::NotificationConfig;

use serde::Deserialize;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "WORD_COUNT";

/// Unprefixed topic variable, honored when the prefixed one is absent.
pub const LEGACY_TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Destination topic (required)
    pub notification: NotificationConfig,

    /// Log format and filter
    #[serde(default)]
    pub logging: LoggingConfig,

    /// AWS SDK overrides
    #[serde(default)]
    pub aws: AwsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `notification.topic_arn` from `SNS_TOPIC_ARN` when set
    /// 3. Reads environment variables with `WORD_COUNT` prefix, which win
    ///    over the seeded value
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WORD_COUNT__NOTIFICATION__TOPIC_ARN=arn:...` -> `notification.topic_arn`
    /// - `WORD_COUNT__LOGGING__ENVIRONMENT=production` -> `logging.environment`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the topic ARN is missing or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(topic_arn) = std::env::var(LEGACY_TOPIC_ARN_VAR) {
            builder = builder.set_default("notification.topic_arn", topic_arn)?;
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
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
        self.notification.validate()?;
        self.logging.validate()?;
        self.aws.validate()?;
        Ok(())
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:word-count";

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("WORD_COUNT__NOTIFICATION__TOPIC_ARN");
        env::remove_var("WORD_COUNT__LOGGING__ENVIRONMENT");
        env::remove_var("WORD_COUNT__LOGGING__LOG_LEVEL");
        env::remove_var("WORD_COUNT__AWS__REGION");
        env::remove_var("WORD_COUNT__AWS__ENDPOINT_URL");
        env::remove_var(LEGACY_TOPIC_ARN_VAR);
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("WORD_COUNT__NOTIFICATION__TOPIC_ARN", TOPIC);
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.notification.topic_arn, TOPIC);
        assert_eq!(config.logging.environment, Environment::Development);
        assert!(config.aws.region.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_topic_variable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(LEGACY_TOPIC_ARN_VAR, TOPIC);
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.notification.topic_arn, TOPIC);
    }

    #[test]
    fn test_prefixed_variable_wins_over_legacy() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(LEGACY_TOPIC_ARN_VAR, "arn:aws:sns:us-east-1:123456789012:old");
        env::set_var("WORD_COUNT__NOTIFICATION__TOPIC_ARN", TOPIC);
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().notification.topic_arn, TOPIC);
    }

    #[test]
    fn test_missing_topic_fails_fast() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_optional_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("WORD_COUNT__NOTIFICATION__TOPIC_ARN", TOPIC);
        env::set_var("WORD_COUNT__LOGGING__ENVIRONMENT", "production");
        env::set_var("WORD_COUNT__AWS__REGION", "eu-west-1");
        env::set_var("WORD_COUNT__AWS__ENDPOINT_URL", "http://localhost:4566");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.environment, Environment::Production);
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.aws.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn test_load_validated_rejects_bad_arn() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("WORD_COUNT__NOTIFICATION__TOPIC_ARN", "not-an-arn");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidTopicArn(_)))
        ));
    }
}
