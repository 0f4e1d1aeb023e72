//! Per-request salt generation.
//!
//! Salts are drawn from the operating system RNG. Any failure of the
//! entropy source is surfaced as [`RandomSourceError`]; there is no
//! fallback generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::errors::RandomSourceError;

/// Length of the salt sent with every signed request.
pub const SALT_LENGTH: usize = 12;

/// Characters a salt may contain.
pub const SALT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Largest multiple of the alphabet size that fits in a byte.
///
/// Bytes at or above this bound are discarded so every symbol is equally likely.
const ACCEPT_BOUND: u8 = (256 / SALT_ALPHABET.len() * SALT_ALPHABET.len()) as u8;

/// Generates a [`SALT_LENGTH`] salt using the OS random source.
pub fn generate_salt() -> Result<String, RandomSourceError> {
    generate_salt_with(&mut OsRng, SALT_LENGTH)
}

/// Generates a salt of `len` characters from `rng`.
///
/// # Errors
///
/// Returns `RandomSourceError` as soon as `rng` fails to produce bytes.
pub fn generate_salt_with<R>(rng: &mut R, len: usize) -> Result<String, RandomSourceError>
where
    R: RngCore + CryptoRng,
{
    let mut salt = String::with_capacity(len);
    let mut buf = [0u8; 32];

    while salt.len() < len {
        rng.try_fill_bytes(&mut buf)?;

        for &byte in buf.iter().filter(|&&b| b < ACCEPT_BOUND) {
            salt.push(SALT_ALPHABET[usize::from(byte) % SALT_ALPHABET.len()] as char);
            if salt.len() == len {
                break;
            }
        }
    }

    Ok(salt)
}
