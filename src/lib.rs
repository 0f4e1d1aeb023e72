//! Rapyd Client - Signed HTTP access to the Rapyd payments API
//!
//! This crate signs outbound Rapyd REST requests with HMAC-SHA256 and
//! authenticates inbound Rapyd webhooks with the same scheme.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
