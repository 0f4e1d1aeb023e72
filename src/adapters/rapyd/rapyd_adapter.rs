//! Rapyd payment gateway adapter.
//!
//! Implements the `PaymentGateway` port over [`SignedTransport`].
//!
//! # Configuration
//!
//! ```ignore
//! let config = AppConfig::load()?;
//! let client = RapydClient::from_config(&config.api)?;
//! let methods = client.get_country_payment_methods("US").await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::resources::{
    CheckoutResponse, CountryPaymentMethodsResponse, CreateCheckout, Customer, CustomerResponse,
    PaymentMethodRequiredFieldsResponse, RetrieveCustomerResponse,
};
use crate::domain::signing::Signer;
use crate::ports::{GatewayError, PaymentGateway};

use super::signed_transport::SignedTransport;

const CREATE_CHECKOUT_PATH: &str = "/v1/checkout";
const RETRIEVE_CHECKOUT_PATH: &str = "/v1/checkout/";

const CREATE_CUSTOMER_PATH: &str = "/v1/customers";
const CUSTOMER_PATH: &str = "/v1/customers/";

const PAYMENT_FIELDS_PATH: &str = "/v1/payment_methods/required_fields/";
const COUNTRY_PAYMENT_METHODS_PATH: &str = "/v1/payment_methods/country?country=";

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Rapyd API client.
#[derive(Debug, Clone)]
pub struct RapydClient {
    transport: SignedTransport,
}

impl RapydClient {
    pub fn new(transport: SignedTransport) -> Self {
        Self { transport }
    }

    /// Builds a client from configuration, with the configured request timeout.
    pub fn from_config(config: &ApiConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| GatewayError::InvalidPath {
            path: config.base_url.clone(),
            source,
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let signer = Arc::new(Signer::new(config.credentials()));
        Ok(Self::new(SignedTransport::new(signer, base_url, http_client)))
    }

    pub fn transport(&self) -> &SignedTransport {
        &self.transport
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let body = self.transport.get_signed(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_json<B, T>(&self, data: &B, path: &str) -> Result<T, GatewayError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = self.transport.post_signed(data, path).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Percent-encodes a value placed into a single path segment.
fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Form-encodes a value placed into the query string.
fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[async_trait]
impl PaymentGateway for RapydClient {
    async fn create_checkout(
        &self,
        request: CreateCheckout,
    ) -> Result<CheckoutResponse, GatewayError> {
        self.post_json(&request, CREATE_CHECKOUT_PATH).await
    }

    async fn retrieve_checkout(&self, checkout_id: &str) -> Result<CheckoutResponse, GatewayError> {
        let path = format!("{}{}", RETRIEVE_CHECKOUT_PATH, encode_segment(checkout_id));
        self.get_json(&path).await
    }

    async fn create_customer(&self, customer: Customer) -> Result<CustomerResponse, GatewayError> {
        self.post_json(&customer, CREATE_CUSTOMER_PATH).await
    }

    async fn retrieve_customer(
        &self,
        customer_id: &str,
    ) -> Result<RetrieveCustomerResponse, GatewayError> {
        let path = format!("{}{}", CUSTOMER_PATH, encode_segment(customer_id));
        self.get_json(&path).await
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        customer: Customer,
    ) -> Result<CustomerResponse, GatewayError> {
        let path = format!("{}{}", CUSTOMER_PATH, encode_segment(customer_id));
        self.post_json(&customer, &path).await
    }

    async fn get_payment_method_fields(
        &self,
        method_type: &str,
    ) -> Result<PaymentMethodRequiredFieldsResponse, GatewayError> {
        let path = format!("{}{}", PAYMENT_FIELDS_PATH, encode_segment(method_type));
        self.get_json(&path).await
    }

    async fn get_country_payment_methods(
        &self,
        country: &str,
    ) -> Result<CountryPaymentMethodsResponse, GatewayError> {
        let path = format!("{}{}", COUNTRY_PAYMENT_METHODS_PATH, encode_query_value(country));
        self.get_json(&path).await
    }
}
