//! Storage client abstraction for the `products` table.
//!
//! A [`ProductStore`] is built once at startup by [`connect`] and shared by
//! the REST API and the MCP tools. Every method acquires its own session for
//! the duration of the call and releases it on return, including on error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::error::CatalogResult;
use super::memory::MemoryProductStore;
use super::model::{Product, ProductCreate};
use super::postgres::PgProductStore;
use crate::core::config::DatabaseConfig;
use crate::core::{Error, Result};

/// DDL for the products table. Column constraints only.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    price NUMERIC(10, 2) NOT NULL,
    description TEXT NULL
)
"#;

/// Shared handle to the configured store.
pub type SharedStore = Arc<dyn ProductStore>;

/// Operations the catalog needs from its storage engine.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Create the `products` table if it does not exist.
    async fn ensure_schema(&self) -> CatalogResult<()>;

    /// All products in primary-key order.
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// The product with `id`, if any.
    async fn get(&self, id: i32) -> CatalogResult<Option<Product>>;

    /// Persist a validated write shape and return the stored row with its
    /// assigned id.
    async fn create(&self, product: &ProductCreate) -> CatalogResult<Product>;

    /// Round-trip to the storage engine.
    async fn ping(&self) -> CatalogResult<()>;
}

/// Open the store named by the connection string and make sure the schema
/// exists.
///
/// `postgres://` and `postgresql://` select PostgreSQL; `memory://` selects
/// the process-local store.
pub async fn connect(config: &DatabaseConfig) -> Result<SharedStore> {
    let store: SharedStore = match scheme(&config.url) {
        Some("postgres") | Some("postgresql") => Arc::new(PgProductStore::connect(config).await?),
        Some("memory") => Arc::new(MemoryProductStore::new()),
        Some(other) => {
            return Err(Error::config(format!(
                "Unsupported database scheme '{}' (expected postgres:// or memory://)",
                other
            )));
        }
        None => return Err(Error::config("DATABASE_URL is not a valid connection string")),
    };

    store.ensure_schema().await?;
    info!("Connected to {} product store", store.backend());

    Ok(store)
}

fn scheme(url: &str) -> Option<&str> {
    url.split_once("://")
        .map(|(scheme, _)| scheme)
        .filter(|scheme| !scheme.is_empty())
}
