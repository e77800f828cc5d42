//! Process-local product store.
//!
//! Selected with a `memory://` connection string. The table lives behind a
//! `RwLock`; each operation holds the guard as its session.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::error::CatalogResult;
use super::model::{Product, ProductCreate};
use super::store::ProductStore;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

/// In-memory implementation of [`ProductStore`].
#[derive(Debug)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ensure_schema(&self) -> CatalogResult<()> {
        Ok(())
    }

    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> CatalogResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, product: &ProductCreate) -> CatalogResult<Product> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let row = Product {
            id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
        };
        table.rows.insert(id, row.clone());
        debug!("Inserted product {} into memory store", id);

        Ok(row)
    }

    async fn ping(&self) -> CatalogResult<()> {
        Ok(())
    }
}
