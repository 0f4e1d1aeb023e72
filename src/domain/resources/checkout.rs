use serde::{Deserialize, Serialize};

use super::data::Data;

/// Body of `POST /v1/checkout`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckout {
    pub amount: f64,
    pub country: String,
    pub currency: String,
    pub customer: String,
    pub cancel_checkout_url: String,
    #[serde(rename = "merchant_reference_id")]
    pub merchant_reference: String,
    pub complete_checkout_url: String,
    pub error_checkout_url: String,
    pub payment_method_type_categories: Vec<String>,
    pub expiration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_currency: Option<String>,
}

/// Response of the checkout endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub data: Data,
}
