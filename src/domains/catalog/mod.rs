//! Catalog domain module.
//!
//! This module owns the `products` table: the storage row, the transfer
//! shapes, and the storage client used by both the REST API and the MCP
//! tools.
//!
//! ## Architecture
//!
//! - `model.rs` - `Product` row, `ProductCreate` write shape, `ProductRead` read shape
//! - `store.rs` - `ProductStore` trait, schema DDL, and `connect()`
//! - `postgres.rs` - PostgreSQL store (`postgres://`)
//! - `memory.rs` - In-process store (`memory://`)
//! - `error.rs` - Catalog-specific error types

mod error;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use memory::MemoryProductStore;
pub use model::{Product, ProductCreate, ProductRead};
pub use postgres::PgProductStore;
pub use store::{ProductStore, SharedStore, connect};
