//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod common;
pub mod get_product;
pub mod list_products;

pub use get_product::{GetProductParams, GetProductTool};
pub use list_products::{ListProductsParams, ListProductsTool};
