use serde::{Deserialize, Serialize};

use super::data::Data;

/// Webhook event types the client recognises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookType {
    #[serde(rename = "PAYMENT_COMPLETED")]
    PaymentCompleted,
    #[serde(rename = "PAYMENT_FAILED")]
    PaymentFailed,
    #[serde(rename = "PAYOUT_COMPLETED")]
    PayoutCompleted,
    #[serde(rename = "PAYOUT_FAILED")]
    PayoutFailed,
    #[serde(untagged)]
    Other(String),
}

/// Inbound webhook callback body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    #[serde(rename = "type")]
    pub webhook_type: WebhookType,
    #[serde(default)]
    pub data: Data,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_webhook_type_parses() {
        let hook: Webhook = serde_json::from_value(json!({
            "id": "wh_1",
            "type": "PAYMENT_COMPLETED",
            "data": {"id": "payment_1", "amount": 10}
        }))
        .unwrap();

        assert_eq!(hook.webhook_type, WebhookType::PaymentCompleted);
        assert_eq!(hook.data.id(), "payment_1");
    }

    #[test]
    fn unknown_webhook_type_is_preserved() {
        let hook: Webhook =
            serde_json::from_value(json!({"id": "wh_2", "type": "REFUND_COMPLETED"})).unwrap();

        assert_eq!(hook.webhook_type, WebhookType::Other("REFUND_COMPLETED".into()));
        assert!(hook.data.0.is_empty());
    }
}
