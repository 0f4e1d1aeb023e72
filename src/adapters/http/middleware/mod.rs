//! HTTP middleware for axum.
//!
//! - `webhook` - Rapyd webhook signature verification

pub mod webhook;

pub use webhook::{require_signed_webhook, WebhookState};
