//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentGateway` - Rapyd checkout, customer and payment method resources

mod payment_gateway;

pub use payment_gateway::{GatewayError, PaymentGateway};
