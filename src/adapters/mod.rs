//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `rapyd` - Signed REST client and webhook verifier
//! - `http` - axum middleware for receiving webhooks

pub mod http;
pub mod rapyd;

pub use rapyd::{RapydClient, SignedTransport, WebhookRejection, WebhookVerifier};
