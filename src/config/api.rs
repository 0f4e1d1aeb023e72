//! Rapyd API configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::signing::Credentials;

/// Sandbox endpoint used when no base URL is configured.
pub const SANDBOX_BASE_URL: &str = "https://sandboxapi.rapyd.net";

/// Production endpoint.
pub const PRODUCTION_BASE_URL: &str = "https://api.rapyd.net";

/// Rapyd API configuration
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Rapyd access key
    pub access_key: String,

    /// Rapyd secret key
    pub secret_key: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Credential pair for the signer
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.access_key.clone(), self.secret_key.clone())
    }

    /// Check if pointed at the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.base_url.starts_with(SANDBOX_BASE_URL)
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_key.is_empty() {
            return Err(ValidationError::MissingRequired("RAPYD__API__ACCESS_KEY"));
        }
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("RAPYD__API__SECRET_KEY"));
        }

        let url = url::Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidBaseUrl)?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ValidationError::InvalidBaseUrl);
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    SANDBOX_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}
