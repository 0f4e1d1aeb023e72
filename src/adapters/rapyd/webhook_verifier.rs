//! Rapyd webhook signature verification.
//!
//! Rapyd signs callbacks with the same HMAC scheme as API requests, over
//! `absolute_url + salt + timestamp + access_key + secret_key + body`.
//! Verification buffers the request body and always puts an equivalent body
//! back on the request, so handlers further down can still read it.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use http::header::HOST;
use http::Request;
use thiserror::Error;

use crate::config::WebhookConfig;
use crate::domain::resources::Webhook;
use crate::domain::signing::{SignatureData, Signer, SALT_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Why a webhook was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookRejection {
    /// The body stream failed or exceeded the size limit.
    #[error("webhook body could not be read")]
    BodyUnreadable,

    /// A required header is absent or not valid UTF-8.
    #[error("missing header: {0}")]
    MissingHeader(&'static str),

    /// The recomputed signature differs from the `signature` header.
    #[error("invalid signature")]
    SignatureMismatch,

    /// The `timestamp` header is outside the configured window.
    #[error("timestamp out of range")]
    Stale,
}

/// Verifies inbound Rapyd webhooks.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    signer: Arc<Signer>,
    scheme: String,
    max_body_bytes: usize,
    max_age_secs: Option<i64>,
}

impl WebhookVerifier {
    /// Creates a verifier that reconstructs URLs as `https://` and accepts
    /// bodies up to 1 MiB.
    pub fn new(signer: Arc<Signer>) -> Self {
        Self {
            signer,
            scheme: "https".to_string(),
            max_body_bytes: 1024 * 1024,
            max_age_secs: None,
        }
    }

    pub fn from_config(signer: Arc<Signer>, config: &WebhookConfig) -> Self {
        Self {
            signer,
            scheme: config.scheme.clone(),
            max_body_bytes: config.max_body_bytes,
            max_age_secs: config.max_age_secs,
        }
    }

    /// Scheme used when the request URI carries none (TLS terminated upstream).
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Reject webhooks whose `timestamp` is older (or further ahead) than `secs`.
    pub fn with_max_age_secs(mut self, secs: i64) -> Self {
        self.max_age_secs = Some(secs);
        self
    }

    /// Returns true if the webhook carries a valid signature.
    ///
    /// Read failures and mismatches both yield `false`; use
    /// [`WebhookVerifier::check`] to tell them apart.
    pub async fn verify(&self, request: &mut Request<Body>) -> bool {
        self.check(request).await.is_ok()
    }

    /// Verifies the webhook and reports the reason for a rejection.
    pub async fn check(&self, request: &mut Request<Body>) -> Result<(), WebhookRejection> {
        let body = self.buffer_body(request).await?;

        let salt = header_str(request, SALT_HEADER)?;
        let timestamp = header_str(request, TIMESTAMP_HEADER)?;
        let provided = header_str(request, SIGNATURE_HEADER)?;

        if let Some(max_age) = self.max_age_secs {
            let sent_at: i64 = timestamp.parse().map_err(|_| WebhookRejection::Stale)?;
            let drift = chrono::Utc::now().timestamp().abs_diff(sent_at);
            if drift > max_age.unsigned_abs() {
                tracing::warn!(timestamp = sent_at, drift_secs = drift, "Webhook outside accepted window");
                return Err(WebhookRejection::Stale);
            }
        }

        let url = self.absolute_url(request);
        let data = SignatureData::webhook(url.as_str(), salt, timestamp, &body);

        if !self.signer.verify(&data, provided) {
            tracing::warn!(url = %url, "Invalid webhook signature");
            return Err(WebhookRejection::SignatureMismatch);
        }

        tracing::debug!(url = %url, "Webhook signature verified");
        Ok(())
    }

    /// Parses a verified webhook body.
    pub fn parse(body: &[u8]) -> Result<Webhook, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// `scheme://host + request-URI` as the callback was addressed.
    pub fn absolute_url(&self, request: &Request<Body>) -> String {
        let uri = request.uri();
        let scheme = uri.scheme_str().unwrap_or(self.scheme.as_str());
        let host = request
            .headers()
            .get(HOST)
            .and_then(|h| h.to_str().ok())
            .or_else(|| uri.authority().map(|a| a.as_str()))
            .unwrap_or_default();
        let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

        format!("{}://{}{}", scheme, host, path_and_query)
    }

    /// Collects the body and replaces it with an equivalent one.
    ///
    /// On failure the request is left with an empty body.
    async fn buffer_body(&self, request: &mut Request<Body>) -> Result<Bytes, WebhookRejection> {
        let body = std::mem::take(request.body_mut());

        match axum::body::to_bytes(body, self.max_body_bytes).await {
            Ok(bytes) => {
                *request.body_mut() = Body::from(bytes.clone());
                Ok(bytes)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read webhook body");
                Err(WebhookRejection::BodyUnreadable)
            }
        }
    }
}

fn header_str<'a>(
    request: &'a Request<Body>,
    name: &'static str,
) -> Result<&'a str, WebhookRejection> {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookRejection::MissingHeader(name))
}
