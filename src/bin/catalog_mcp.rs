//! Product Catalog MCP server entry point.
//!
//! Exposes `list_products` and `get_product` as MCP tools over the
//! configured transport (STDIO by default).

use anyhow::Result;
use tracing::info;

use product_catalog::core::{Config, McpServer, TransportService, init_logging};
use product_catalog::domains::catalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast when DATABASE_URL is missing
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    info!("Starting {} MCP server v{}", config.server.name, config.server.version);

    let store = catalog::connect(&config.database).await?;

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, store);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
