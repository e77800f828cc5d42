//! Product Catalog REST API entry point.
//!
//! Loads configuration, connects to the product store (creating the table if
//! needed), and serves `/products` until Ctrl+C.

use anyhow::Result;
use tracing::info;

use product_catalog::core::{Config, init_logging};
use product_catalog::domains::{api::ApiServer, catalog};

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast when DATABASE_URL is missing
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    info!("Starting {} REST API v{}", config.server.name, config.server.version);

    let store = catalog::connect(&config.database).await?;

    ApiServer::new(config.api, store).run().await?;

    info!("Server shutting down");

    Ok(())
}
