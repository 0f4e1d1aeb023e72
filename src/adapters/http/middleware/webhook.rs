//! Webhook signature middleware for axum.
//!
//! ```text
//! Request → require_signed_webhook → verifies signature, restores body
//!                                      ↓
//!                              Handler → reads the same body
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::post, middleware};
//! use std::sync::Arc;
//!
//! let verifier = Arc::new(WebhookVerifier::new(signer));
//!
//! let app = Router::new()
//!     .route("/webhooks/rapyd", post(handle_webhook))
//!     .layer(middleware::from_fn_with_state(verifier, require_signed_webhook));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::adapters::rapyd::WebhookVerifier;

/// Middleware state - the shared verifier.
pub type WebhookState = Arc<WebhookVerifier>;

/// Rejects webhooks without a valid Rapyd signature with 401 Unauthorized.
///
/// Accepted requests are forwarded with their body intact.
pub async fn require_signed_webhook(
    State(verifier): State<WebhookState>,
    mut request: Request,
    next: Next,
) -> Response {
    match verifier.check(&mut request).await {
        Ok(()) => next.run(request).await,
        Err(rejection) => {
            tracing::warn!(reason = %rejection, "Rejected Rapyd webhook");
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "INVALID_WEBHOOK_SIGNATURE",
                    "message": rejection.to_string(),
                })),
            )
                .into_response()
        }
    }
}
