//! Tools domain module.
//!
//! Re-exposes the catalog's list and get operations as MCP tools. Each tool
//! call opens its own storage session, independent of the REST API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Error policy
//!
//! `get_product` answers an unknown id with `{"error": "Product not found"}`
//! as a successful result, where the REST API answers 404.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
