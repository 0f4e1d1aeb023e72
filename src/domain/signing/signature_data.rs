//! Canonical signable strings.
//!
//! Rapyd authenticates outbound requests and inbound webhooks with the same
//! HMAC scheme but different canonical strings:
//!
//! ```text
//! outbound: method_lower + path_with_query + salt + timestamp + access_key + secret_key + body
//! webhook:  absolute_url               + salt + timestamp + access_key + secret_key + body
//! ```
//!
//! Fields are concatenated with no delimiters. Both shapes are required by
//! the remote API and must not be unified.

use secrecy::{ExposeSecret, SecretString};

/// Access/secret key pair issued by Rapyd.
#[derive(Clone)]
pub struct Credentials {
    access_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::new(secret_key.into()),
        }
    }

    /// The public access key, sent as the `access_key` header.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Request fields covered by a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureData {
    /// Lowercase HTTP verb; empty for webhooks.
    pub method: String,
    /// Request URI for outbound requests, absolute URL for webhooks.
    pub path: String,
    pub salt: String,
    /// Unix seconds as a decimal string.
    pub timestamp: String,
    /// Raw payload bytes, empty when there is none.
    pub body: Vec<u8>,
}

impl SignatureData {
    /// Signature fields for an outbound API request.
    ///
    /// `path` is the request URI (path and query) without scheme or host.
    pub fn outbound(
        method: &str,
        path: impl Into<String>,
        salt: impl Into<String>,
        timestamp: impl Into<String>,
        body: &[u8],
    ) -> Self {
        Self {
            method: method.to_lowercase(),
            path: path.into(),
            salt: salt.into(),
            timestamp: timestamp.into(),
            body: body.to_vec(),
        }
    }

    /// Signature fields for an inbound webhook callback.
    ///
    /// The method is not part of the webhook signature and `url` is the
    /// absolute URL the callback was delivered to.
    pub fn webhook(
        url: impl Into<String>,
        salt: impl Into<String>,
        timestamp: impl Into<String>,
        body: &[u8],
    ) -> Self {
        Self {
            method: String::new(),
            path: url.into(),
            salt: salt.into(),
            timestamp: timestamp.into(),
            body: body.to_vec(),
        }
    }

    /// Builds the exact bytes fed to the HMAC.
    ///
    /// The body is appended as-is; it is never re-encoded.
    pub fn canonical_string(&self, access_key: &str, secret_key: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            self.method.len()
                + self.path.len()
                + self.salt.len()
                + self.timestamp.len()
                + access_key.len()
                + secret_key.len()
                + self.body.len(),
        );
        out.extend_from_slice(self.method.as_bytes());
        out.extend_from_slice(self.path.as_bytes());
        out.extend_from_slice(self.salt.as_bytes());
        out.extend_from_slice(self.timestamp.as_bytes());
        out.extend_from_slice(access_key.as_bytes());
        out.extend_from_slice(secret_key.as_bytes());
        out.extend_from_slice(&self.body);
        out
    }
}
