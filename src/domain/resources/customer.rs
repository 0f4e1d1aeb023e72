use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::address::Address;
use super::data::Data;
use super::payment_method::PaymentMethod;

/// Body of `POST /v1/customers` and `POST /v1/customers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub addresses: Vec<Address>,
    pub business_vat_id: String,
    pub coupon: String,
    pub default_payment_method: String,
    pub description: String,
    #[serde(rename = "e_wallet")]
    pub ewallet: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "phone_number")]
    pub phone: String,
    pub payment_method: PaymentMethod,
}

/// Payment method stored on a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPaymentMethod {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub method_type: String,
    #[serde(default)]
    pub address: Vec<Address>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// A single stored payment method wrapped in `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrieveCustomerMethod {
    #[serde(default)]
    pub data: CustomerPaymentMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrieveCustomerMethods {
    #[serde(default)]
    pub data: Vec<CustomerPaymentMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrieveCustomer {
    #[serde(default)]
    pub default_payment_method: String,
    #[serde(default)]
    pub payment_methods: RetrieveCustomerMethods,
}

/// Response of `GET /v1/customers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrieveCustomerResponse {
    #[serde(default)]
    pub data: RetrieveCustomer,
}

/// Response of customer create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    #[serde(default)]
    pub data: Data,
}

/// Stored payment methods of a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPaymentMethodListResponse {
    #[serde(default)]
    pub data: Vec<CustomerPaymentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_serializes_wire_names() {
        let customer = Customer {
            name: "Jane Doe".into(),
            ewallet: "ewallet_1".into(),
            phone: "+14155550100".into(),
            ..Default::default()
        };

        let value = serde_json::to_value(&customer).unwrap();

        assert_eq!(value["e_wallet"], "ewallet_1");
        assert_eq!(value["phone_number"], "+14155550100");
        assert_eq!(value["payment_method"]["type"], "");
    }

    #[test]
    fn retrieve_customer_response_parses_payment_methods() {
        let response: RetrieveCustomerResponse = serde_json::from_value(json!({
            "data": {
                "default_payment_method": "card_1",
                "payment_methods": {
                    "data": [{"id": "card_1", "type": "us_visa_card", "category": "card", "fields": {"last4": "4242"}}]
                }
            }
        }))
        .unwrap();

        assert_eq!(response.data.default_payment_method, "card_1");
        let method = &response.data.payment_methods.data[0];
        assert_eq!(method.category, "card");
        assert_eq!(method.fields["last4"], "4242");
    }

    #[test]
    fn single_payment_method_parses_and_omits_empty_type() {
        let response: RetrieveCustomerMethod = serde_json::from_value(json!({
            "data": {"id": "card_7", "type": "us_visa_card", "category": "card", "address": []}
        }))
        .unwrap();
        assert_eq!(response.data.id, "card_7");

        let untyped = CustomerPaymentMethod {
            id: "card_8".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&untyped).unwrap();
        assert!(value.get("type").is_none());
    }

    #[test]
    fn payment_method_list_response_parses() {
        let response: CustomerPaymentMethodListResponse = serde_json::from_value(json!({
            "status": {"status": "SUCCESS"},
            "data": [
                {"id": "card_1", "type": "us_visa_card", "category": "card"},
                {"id": "bank_1", "type": "us_ach_bank", "category": "bank_transfer"}
            ]
        }))
        .unwrap();

        let ids: Vec<&str> = response.data.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["card_1", "bank_1"]);
        assert_eq!(response.data[1].category, "bank_transfer");
    }
}
