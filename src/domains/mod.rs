//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the `products` table, its transfer shapes, and the store
//! - **api**: REST endpoints over the catalog
//! - **tools**: MCP tools over the catalog

pub mod api;
pub mod catalog;
pub mod tools;
