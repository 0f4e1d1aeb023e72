//! Signing error types.

use thiserror::Error;

/// The secure random source could not produce a value.
#[derive(Debug, Error)]
#[error("secure random source unavailable: {0}")]
pub struct RandomSourceError(#[from] rand::Error);

/// Errors that prevent a request from being signed.
///
/// A request that fails to sign is never dispatched.
#[derive(Debug, Error)]
pub enum SigningError {
    /// Salt generation failed.
    #[error("error getting salt: {0}")]
    RandomSource(#[from] RandomSourceError),

    /// A signature header value is not a valid HTTP header value.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(&'static str),
}
