//! Rapyd API adapter.
//!
//! - `SignedTransport` - reqwest client that signs every outbound request
//! - `RapydClient` - `PaymentGateway` implementation over the transport
//! - `WebhookVerifier` - signature check for inbound callbacks
//!
//! # Security
//!
//! - Signatures are HMAC-SHA256 rendered as base64 of the hex digest
//! - Webhook signatures are compared in constant time
//! - Secret keys are held in `secrecy::SecretString`

mod rapyd_adapter;
mod signed_transport;
mod webhook_verifier;

pub use rapyd_adapter::RapydClient;
pub use signed_transport::SignedTransport;
pub use webhook_verifier::{WebhookRejection, WebhookVerifier};
