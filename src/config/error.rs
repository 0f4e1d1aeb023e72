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

    #[error("Invalid API base URL")]
    InvalidBaseUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Webhook scheme must be http or https")]
    InvalidWebhookScheme,

    #[error("Webhook body limit must be positive")]
    InvalidBodyLimit,

    #[error("Webhook max age must be positive")]
    InvalidMaxAge,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
