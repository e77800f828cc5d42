//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{GetProductTool, ListProductsTool};
use crate::domains::catalog::SharedStore;

#[cfg(feature = "http")]
use super::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    store: SharedStore,
}

impl ToolRegistry {
    /// Create a new tool registry over the given store.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![ListProductsTool::NAME, GetProductTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![ListProductsTool::to_tool(), GetProductTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            ListProductsTool::NAME => {
                ListProductsTool::http_handler(arguments, self.store.clone()).await
            }
            GetProductTool::NAME => GetProductTool::http_handler(arguments, self.store.clone()).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
