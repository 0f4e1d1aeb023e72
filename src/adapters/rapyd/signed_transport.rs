//! Signed HTTP transport for the Rapyd API.
//!
//! Wraps a `reqwest::Client`. Every request is signed immediately before
//! dispatch; a request that cannot be signed is never sent. Non-2xx
//! responses are returned as [`GatewayError::Remote`] with the raw body.

use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;

use crate::domain::signing::{
    SignatureHeaders, Signer, SigningError, ACCESS_KEY_HEADER, DEFAULT_CONTENT_TYPE, SALT_HEADER,
    SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
use crate::ports::GatewayError;

/// HTTP client that signs every request it sends.
#[derive(Debug, Clone)]
pub struct SignedTransport {
    signer: Arc<Signer>,
    http_client: reqwest::Client,
    base_url: Url,
}

impl SignedTransport {
    pub fn new(signer: Arc<Signer>, base_url: Url, http_client: reqwest::Client) -> Self {
        Self {
            signer,
            http_client,
            base_url,
        }
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Resolves an API path against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|source| GatewayError::InvalidPath {
                path: path.to_string(),
                source,
            })
    }

    /// Adds `access_key`, `salt`, `timestamp`, `Content-Type` and `signature`
    /// headers to `request`.
    ///
    /// `body` must be the exact bytes the request will carry.
    pub fn sign_request(
        &self,
        request: &mut reqwest::Request,
        body: &[u8],
    ) -> Result<(), SigningError> {
        let path = request_uri(request.url());
        let headers = self
            .signer
            .signature_headers(request.method().as_str(), &path, body)?;

        apply_signature_headers(request, &headers)
    }

    pub async fn get_signed(&self, path: &str) -> Result<Vec<u8>, GatewayError> {
        self.send(Method::GET, path, Vec::new()).await
    }

    /// Serializes `data` as JSON and posts it.
    pub async fn post_signed<T>(&self, data: &T, path: &str) -> Result<Vec<u8>, GatewayError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(data)?;
        self.send(Method::POST, path, body).await
    }

    pub async fn delete_signed(&self, path: &str) -> Result<Vec<u8>, GatewayError> {
        self.send(Method::DELETE, path, Vec::new()).await
    }

    async fn send(&self, method: Method, path: &str, body: Vec<u8>) -> Result<Vec<u8>, GatewayError> {
        let url = self.resolve(path)?;

        let mut builder = self.http_client.request(method, url);
        if !body.is_empty() {
            builder = builder.body(body.clone());
        }
        let mut request = builder.build()?;

        self.sign_request(&mut request, &body)?;

        tracing::debug!(
            method = %request.method(),
            path = %request_uri(request.url()),
            "Dispatching signed Rapyd request"
        );

        let response = self.http_client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                path,
                error = %error_text,
                "Rapyd request failed"
            );
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body: error_text,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Path plus query of `url`, without scheme or host.
pub(crate) fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn apply_signature_headers(
    request: &mut reqwest::Request,
    signature: &SignatureHeaders,
) -> Result<(), SigningError> {
    let headers = request.headers_mut();

    let values = [
        (ACCESS_KEY_HEADER, signature.access_key.as_str()),
        (SALT_HEADER, signature.salt.as_str()),
        (TIMESTAMP_HEADER, signature.timestamp.as_str()),
        (SIGNATURE_HEADER, signature.signature.as_str()),
    ];

    for (name, value) in values {
        let value =
            HeaderValue::from_str(value).map_err(|_| SigningError::InvalidHeaderValue(name))?;
        headers.insert(HeaderName::from_static(name), value);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Ok(())
}
