//! Domain layer containing signing logic and Rapyd resource types.
//!
//! # Module Organization
//!
//! - `signing` - Salt generation, canonical strings, HMAC signatures
//! - `resources` - Request and response bodies for the REST endpoints

pub mod resources;
pub mod signing;
