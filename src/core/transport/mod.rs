//! Transport layer for the MCP server.
//!
//! - **STDIO** (feature `stdio`, default): the client launches `catalog_mcp`
//!   as a subprocess and talks over stdin/stdout.
//! - **HTTP** (feature `http`): JSON-RPC 2.0 posted to a single route.
//!
//! The error types are shared with the REST API listener.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
