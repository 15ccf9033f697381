//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Environment name; selects the output format
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl LoggingConfig {
    /// Structured JSON output is used everywhere except development
    pub fn json_output(&self) -> bool {
        self.environment != Environment::Development
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::BlankLogLevel);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,word_count_notifier=debug,aws_config=warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.log_level.starts_with("info"));
        assert!(!config.json_output());
    }

    #[test]
    fn test_json_output_outside_development() {
        let mut config = LoggingConfig::default();
        config.environment = Environment::Staging;
        assert!(config.json_output());

        config.environment = Environment::Production;
        assert!(config.json_output());
    }

    #[test]
    fn test_blank_log_level() {
        let config = LoggingConfig {
            log_level: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::BlankLogLevel));
    }
}
