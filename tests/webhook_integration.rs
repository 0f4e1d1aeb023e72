//! Integration tests for receiving Rapyd webhooks over real HTTP.
//!
//! The middleware runs in front of a handler on a local server; the test
//! signs callbacks the way Rapyd does and posts them with reqwest.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{body::Bytes, extract::State, middleware, routing::post, Router};
use serde_json::Value;

use rapyd_client::adapters::http::{require_signed_webhook, WebhookState};
use rapyd_client::adapters::WebhookVerifier;
use rapyd_client::config::WebhookConfig;
use rapyd_client::domain::resources::{Webhook, WebhookType};
use rapyd_client::domain::signing::{Credentials, SignatureData, Signer};

const BODY: &str = r#"{"id":"wh_1","type":"PAYMENT_COMPLETED","data":{"id":"payment_1","amount":100}}"#;
const SALT: &str = "Zx9Yw8Vu7Ts6";

// =============================================================================
// Test Infrastructure
// =============================================================================

type Received = Arc<Mutex<Vec<Webhook>>>;

struct Receiver {
    addr: SocketAddr,
    received: Received,
    _handle: tokio::task::JoinHandle<()>,
}

impl Receiver {
    async fn spawn(config: WebhookConfig) -> Self {
        let verifier: WebhookState = Arc::new(WebhookVerifier::from_config(signer(), &config));
        let received: Received = Arc::new(Mutex::new(Vec::new()));

        let router = Router::new()
            .route("/webhooks/rapyd", post(handle_webhook))
            .with_state(received.clone())
            .layer(middleware::from_fn_with_state(verifier, require_signed_webhook));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            received,
            _handle: handle,
        }
    }

    fn callback_url(&self) -> String {
        format!("http://{}/webhooks/rapyd", self.addr)
    }

    async fn post(&self, timestamp: &str, signature: &str, body: &str) -> reqwest::Response {
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .post(self.callback_url())
            .header("salt", SALT)
            .header("timestamp", timestamp)
            .header("signature", signature)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
    }

    fn received(&self) -> Vec<Webhook> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle_webhook(State(received): State<Received>, body: Bytes) -> &'static str {
    let webhook = WebhookVerifier::parse(&body).expect("verified body should parse");
    received.lock().unwrap().push(webhook);
    "ok"
}

fn signer() -> Arc<Signer> {
    Arc::new(Signer::new(Credentials::new("rak_hook", "rsk_hook")))
}

fn http_config() -> WebhookConfig {
    WebhookConfig {
        scheme: "http".to_string(),
        ..Default::default()
    }
}

fn sign(url: &str, timestamp: &str, body: &str) -> String {
    signer().signature(&SignatureData::webhook(url, SALT, timestamp, body.as_bytes()))
}

fn now() -> String {
    chrono::Utc::now().timestamp().to_string()
}

// =============================================================================
// Accepted Webhooks
// =============================================================================

#[tokio::test]
async fn signed_webhook_is_delivered_to_handler() {
    let receiver = Receiver::spawn(http_config()).await;
    let timestamp = now();
    let signature = sign(&receiver.callback_url(), &timestamp, BODY);

    let response = receiver.post(&timestamp, &signature, BODY).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");

    let received = receiver.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, "wh_1");
    assert_eq!(received[0].webhook_type, WebhookType::PaymentCompleted);
    assert_eq!(received[0].data.id(), "payment_1");
}

#[tokio::test]
async fn fresh_webhook_passes_freshness_window() {
    let receiver = Receiver::spawn(WebhookConfig {
        max_age_secs: Some(300),
        ..http_config()
    })
    .await;
    let timestamp = now();
    let signature = sign(&receiver.callback_url(), &timestamp, BODY);

    let response = receiver.post(&timestamp, &signature, BODY).await;

    assert_eq!(response.status(), 200);
}

// =============================================================================
// Rejected Webhooks
// =============================================================================

async fn rejection_message(response: reqwest::Response) -> String {
    assert_eq!(response.status(), 401);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["error"], "INVALID_WEBHOOK_SIGNATURE");
    json["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn tampered_body_is_rejected() {
    let receiver = Receiver::spawn(http_config()).await;
    let timestamp = now();
    let signature = sign(&receiver.callback_url(), &timestamp, BODY);
    let tampered = BODY.replace("100", "999");

    let response = receiver.post(&timestamp, &signature, &tampered).await;

    assert_eq!(rejection_message(response).await, "invalid signature");
    assert!(receiver.received().is_empty());
}

#[tokio::test]
async fn signature_for_https_url_fails_on_http_receiver() {
    let receiver = Receiver::spawn(http_config()).await;
    let timestamp = now();
    let https_url = receiver.callback_url().replacen("http://", "https://", 1);
    let signature = sign(&https_url, &timestamp, BODY);

    let response = receiver.post(&timestamp, &signature, BODY).await;

    assert_eq!(rejection_message(response).await, "invalid signature");
}

#[tokio::test]
async fn stale_webhook_is_rejected() {
    let receiver = Receiver::spawn(WebhookConfig {
        max_age_secs: Some(300),
        ..http_config()
    })
    .await;
    let timestamp = (chrono::Utc::now().timestamp() - 3600).to_string();
    let signature = sign(&receiver.callback_url(), &timestamp, BODY);

    let response = receiver.post(&timestamp, &signature, BODY).await;

    assert_eq!(rejection_message(response).await, "timestamp out of range");
    assert!(receiver.received().is_empty());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let receiver = Receiver::spawn(WebhookConfig {
        max_body_bytes: 16,
        ..http_config()
    })
    .await;
    let timestamp = now();
    let signature = sign(&receiver.callback_url(), &timestamp, BODY);

    let response = receiver.post(&timestamp, &signature, BODY).await;

    assert_eq!(rejection_message(response).await, "webhook body could not be read");
}
