//! Product Catalog Library
//!
//! A product catalog backed by a single `products` table, exposed twice:
//! as a REST API and as Model Context Protocol (MCP) tools. Both surfaces
//! share one explicitly constructed storage client.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, logging, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: storage schema, sessions, and transfer shapes
//!   - **api**: REST endpoints (`/products`)
//!   - **tools**: `list_products` and `get_product` MCP tools
//!
//! # Example
//!
//! ```rust,no_run
//! use product_catalog::{core::Config, domains::api::ApiServer, domains::catalog};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let store = catalog::connect(&config.database).await?;
//!     ApiServer::new(config.api, store).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
