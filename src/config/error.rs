//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid SNS topic ARN: {0}")]
    InvalidTopicArn(String),

    #[error("Invalid AWS endpoint URL: {0}")]
    InvalidEndpointUrl(String),

    #[error("AWS region cannot be blank")]
    BlankRegion,

    #[error("Log level cannot be blank")]
    BlankLogLevel,
}
