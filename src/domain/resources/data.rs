//! Loosely typed response payloads.
//!
//! Rapyd wraps most responses in `{"status": ..., "data": {...}}`. Where the
//! shape of `data` varies by endpoint it is kept as a JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped JSON object from a response or webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data(pub Map<String, Value>);

impl Data {
    /// The `id` field, or an empty string.
    pub fn id(&self) -> &str {
        self.get_str("id")
    }

    /// A string field, or an empty string if absent or not a string.
    pub fn get_str(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// An integer field, or zero if absent or not an integer.
    pub fn get_i64(&self, key: &str) -> i64 {
        self.0.get(key).and_then(Value::as_i64).unwrap_or_default()
    }

    /// A nested object, or an empty object.
    pub fn get_object(&self, key: &str) -> Data {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .cloned()
            .map(Data)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
