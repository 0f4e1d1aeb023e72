//! Rapyd request signing.
//!
//! Every outbound request carries `access_key`, `salt`, `timestamp` and
//! `signature` headers. The signature is
//! `base64(hex(HMAC_SHA256(secret_key, canonical_string)))`; inbound
//! webhooks are authenticated with the same scheme over a different
//! canonical string (see [`SignatureData`]).

mod errors;
mod salt;
mod signature_data;
mod signer;

pub use errors::{RandomSourceError, SigningError};
pub use salt::{generate_salt, generate_salt_with, SALT_ALPHABET, SALT_LENGTH};
pub use signature_data::{Credentials, SignatureData};
pub use signer::{
    encode_signature, Digest, SignatureHeaders, Signer, ACCESS_KEY_HEADER, DEFAULT_CONTENT_TYPE,
    SALT_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
