//! HTTP adapters for the webhook receiving side.

pub mod middleware;

pub use middleware::{require_signed_webhook, WebhookState};
