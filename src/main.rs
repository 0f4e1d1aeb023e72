//! `rapyd` - list the payment methods available in a country.
//!
//! ```text
//! RAPYD__API__ACCESS_KEY=... RAPYD__API__SECRET_KEY=... rapyd GB
//! ```

use anyhow::{anyhow, Context};
use rapyd_client::adapters::RapydClient;
use rapyd_client::config::AppConfig;
use rapyd_client::ports::PaymentGateway;

const DEFAULT_COUNTRY: &str = "US";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    config
        .logging
        .init_tracing()
        .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))?;

    let country = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

    tracing::info!(
        base_url = %config.api.base_url,
        sandbox = config.api.is_sandbox(),
        %country,
        "Listing payment methods"
    );

    let client = RapydClient::from_config(&config.api)?;
    let methods = client
        .get_country_payment_methods(&country)
        .await
        .with_context(|| format!("Failed to list payment methods for {country}"))?;

    println!("{}", serde_json::to_string_pretty(&methods)?);
    Ok(())
}
