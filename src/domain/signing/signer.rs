//! HMAC-SHA256 request signer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::SigningError;
use super::salt::{generate_salt_with, SALT_LENGTH};
use super::signature_data::{Credentials, SignatureData};

type HmacSha256 = Hmac<Sha256>;

/// Raw HMAC-SHA256 output.
pub type Digest = [u8; 32];

pub const ACCESS_KEY_HEADER: &str = "access_key";
pub const SALT_HEADER: &str = "salt";
pub const TIMESTAMP_HEADER: &str = "timestamp";
pub const SIGNATURE_HEADER: &str = "signature";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Header values produced for one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeaders {
    pub access_key: String,
    pub salt: String,
    pub timestamp: String,
    pub signature: String,
}

/// Signs canonical strings with a fixed credential pair.
///
/// Holds no mutable state; share it behind an `Arc` between tasks.
#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn access_key(&self) -> &str {
        self.credentials.access_key()
    }

    /// Computes the digest for `data`.
    ///
    /// Key fields of the canonical string come from `override_keys` when
    /// given (an empty override field falls back to the stored one). The MAC
    /// key is always the stored secret.
    pub fn sign(&self, data: &SignatureData, override_keys: Option<&Credentials>) -> Digest {
        let stored = &self.credentials;
        let (access_key, secret_key) = match override_keys {
            Some(keys) => (
                non_empty_or(keys.access_key(), stored.access_key()),
                non_empty_or(keys.secret_key(), stored.secret_key()),
            ),
            None => (stored.access_key(), stored.secret_key()),
        };

        let canonical = data.canonical_string(access_key, secret_key);

        let mut mac = HmacSha256::new_from_slice(stored.secret_key().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(&canonical);

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&mac.finalize().into_bytes());
        digest
    }

    /// Computes the wire form of the signature for `data` with the stored keys.
    pub fn signature(&self, data: &SignatureData) -> String {
        encode_signature(&self.sign(data, None))
    }

    /// Produces salt, timestamp and signature for an outbound request.
    ///
    /// `path` is the request URI (path and query) without scheme or host.
    pub fn signature_headers(
        &self,
        method: &str,
        path: &str,
        body: &[u8],
    ) -> Result<SignatureHeaders, SigningError> {
        self.signature_headers_with(&mut OsRng, chrono::Utc::now().timestamp(), method, path, body)
    }

    /// Same as [`Signer::signature_headers`] with an explicit RNG and clock.
    pub fn signature_headers_with<R>(
        &self,
        rng: &mut R,
        unix_seconds: i64,
        method: &str,
        path: &str,
        body: &[u8],
    ) -> Result<SignatureHeaders, SigningError>
    where
        R: RngCore + CryptoRng,
    {
        let salt = generate_salt_with(rng, SALT_LENGTH)?;
        let timestamp = unix_seconds.to_string();

        let data = SignatureData::outbound(method, path, salt.as_str(), timestamp.as_str(), body);
        let signature = self.signature(&data);

        Ok(SignatureHeaders {
            access_key: self.access_key().to_string(),
            salt,
            timestamp,
            signature,
        })
    }

    /// Checks `provided` against the signature of `data` in constant time.
    pub fn verify(&self, data: &SignatureData, provided: &str) -> bool {
        constant_time_compare(self.signature(data).as_bytes(), provided.as_bytes())
    }
}

/// Renders a digest as `base64(hex(digest))`.
///
/// The hex string itself is base64-encoded, not the raw digest.
pub fn encode_signature(digest: &Digest) -> String {
    STANDARD.encode(hex::encode(digest))
}

fn non_empty_or<'a>(candidate: &'a str, fallback: &'a str) -> &'a str {
    if candidate.is_empty() {
        fallback
    } else {
        candidate
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
