//! Payment gateway port.
//!
//! Defines the operations the application needs from the Rapyd REST API.
//! The signed HTTP implementation lives in `adapters::rapyd`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::resources::{
    CheckoutResponse, CountryPaymentMethodsResponse, CreateCheckout, Customer, CustomerResponse,
    PaymentMethodRequiredFieldsResponse, RetrieveCustomerResponse,
};
use crate::domain::signing::SigningError;

/// Port for the Rapyd REST resources.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout page.
    async fn create_checkout(&self, request: CreateCheckout)
        -> Result<CheckoutResponse, GatewayError>;

    /// Get a checkout by ID.
    async fn retrieve_checkout(&self, checkout_id: &str) -> Result<CheckoutResponse, GatewayError>;

    /// Create a customer.
    async fn create_customer(&self, customer: Customer) -> Result<CustomerResponse, GatewayError>;

    /// Get a customer and their stored payment methods.
    async fn retrieve_customer(
        &self,
        customer_id: &str,
    ) -> Result<RetrieveCustomerResponse, GatewayError>;

    /// Update a customer.
    async fn update_customer(
        &self,
        customer_id: &str,
        customer: Customer,
    ) -> Result<CustomerResponse, GatewayError>;

    /// List the fields a payment method type requires.
    async fn get_payment_method_fields(
        &self,
        method_type: &str,
    ) -> Result<PaymentMethodRequiredFieldsResponse, GatewayError>;

    /// List payment methods available in a country (ISO alpha-2).
    async fn get_country_payment_methods(
        &self,
        country: &str,
    ) -> Result<CountryPaymentMethodsResponse, GatewayError>;
}

/// Errors from gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request could not be signed and was not sent.
    #[error("error signing request: {0}")]
    Signing(#[from] SigningError),

    /// The HTTP exchange itself failed.
    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Rapyd answered with a non-2xx status.
    #[error("got status code {status}, response {body}")]
    Remote { status: u16, body: String },

    /// The endpoint path could not be resolved against the base URL.
    #[error("error parsing path {path}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Request body could not be encoded or response body decoded.
    #[error("error (un)marshalling data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// HTTP status returned by Rapyd, if the failure was remote.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the same request could succeed on a later attempt.
    ///
    /// The client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(e) => e.is_timeout() || e.is_connect(),
            GatewayError::Remote { status, .. } => *status == 429 || *status >= 500,
            GatewayError::Signing(_)
            | GatewayError::InvalidPath { .. }
            | GatewayError::Serialization(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn remote_error_displays_status_and_body() {
        let err = GatewayError::Remote {
            status: 400,
            body: r#"{"status":{"error_code":"INVALID_FIELDS"}}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"got status code 400, response {"status":{"error_code":"INVALID_FIELDS"}}"#
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn server_errors_and_throttling_are_retryable() {
        let remote = |status| GatewayError::Remote { status, body: String::new() };
        assert!(remote(500).is_retryable());
        assert!(remote(503).is_retryable());
        assert!(remote(429).is_retryable());
        assert!(!remote(400).is_retryable());
        assert!(!remote(401).is_retryable());
        assert!(!remote(404).is_retryable());
    }

    #[test]
    fn invalid_path_is_not_retryable() {
        let err = GatewayError::InvalidPath {
            path: "http://[".to_string(),
            source: url::ParseError::InvalidIpv6Address,
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("error parsing path http://["));
    }

    #[test]
    fn serialization_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GatewayError = json_err.into();
        assert!(matches!(err, GatewayError::Serialization(_)));
    }
}
