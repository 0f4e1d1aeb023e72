//! Webhook receiver configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Webhook receiver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Scheme used to rebuild the callback URL when TLS ends upstream
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Largest webhook body accepted, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Optional freshness window for the `timestamp` header, in seconds
    pub max_age_secs: Option<i64>,
}

impl WebhookConfig {
    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(ValidationError::InvalidWebhookScheme);
        }
        if self.max_body_bytes == 0 {
            return Err(ValidationError::InvalidBodyLimit);
        }
        if matches!(self.max_age_secs, Some(secs) if secs <= 0) {
            return Err(ValidationError::InvalidMaxAge);
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            max_body_bytes: default_max_body_bytes(),
            max_age_secs: None,
        }
    }
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WebhookConfig::default();
        assert_eq!(config.scheme, "https");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(config.max_age_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_scheme() {
        let config = WebhookConfig {
            scheme: "wss".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidWebhookScheme));
    }

    #[test]
    fn test_zero_body_limit() {
        let config = WebhookConfig {
            max_body_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBodyLimit));
    }

    #[test]
    fn test_non_positive_max_age() {
        let config = WebhookConfig {
            max_age_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxAge));
    }
}
