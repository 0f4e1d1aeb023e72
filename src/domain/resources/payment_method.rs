use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payment method attached to a customer at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(rename = "type", default)]
    pub method_type: String,
}

/// Description of one input a payment method requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub regex: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "is_required", default)]
    pub required: bool,
    #[serde(rename = "is_updatable", default)]
    pub updatable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRequiredFields {
    #[serde(rename = "type", default)]
    pub method_type: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(rename = "payment_method_options", default)]
    pub method_options: Vec<Field>,
    #[serde(default)]
    pub payment_options: Vec<Field>,
    #[serde(rename = "minimum_expiration_seconds", default)]
    pub min_expiration_seconds: i64,
    #[serde(rename = "maximum_expiration_seconds", default)]
    pub max_expiration_seconds: i64,
}

/// Response of `GET /v1/payment_methods/required_fields/{type}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRequiredFieldsResponse {
    #[serde(default)]
    pub data: PaymentMethodRequiredFields,
}

/// A payment method available in a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryPaymentMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub country: String,
    pub payment_flow_type: String,
    pub currencies: Vec<String>,
    pub status: i32,
    pub is_cancelable: bool,
    pub payment_options: Vec<Field>,
    pub is_expirable: bool,
    pub is_online: bool,
    pub is_refundable: bool,
    pub is_virtual: bool,
    pub multiple_overage_allowed: bool,
    pub is_tokenizable: bool,
    #[serde(rename = "minimum_expiration_seconds")]
    pub min_expiration_seconds: i64,
    #[serde(rename = "maximum_expiration_seconds")]
    pub max_expiration_seconds: i64,
    #[serde(rename = "virtual_payment_method_type")]
    pub virtual_type: String,
}

/// Response of `GET /v1/payment_methods/country?country=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPaymentMethodsResponse {
    #[serde(default)]
    pub data: Vec<CountryPaymentMethod>,
}
