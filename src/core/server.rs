//! MCP server handler.
//!
//! Implements the MCP protocol for the catalog tools. The tools themselves
//! live in `domains/tools/definitions/`; the rmcp `ToolRouter` is built in
//! `domains/tools/router.rs` from the same store the REST API uses.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::catalog::SharedStore;
use crate::domains::tools::{ToolRegistry, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::{catalog::ProductStore, tools::ToolError};

const INSTRUCTIONS: &str = "Product catalog server. Use list_products to browse the catalog \
                            and get_product to fetch one product by its ID.";

/// The main MCP server handler.
///
/// Cheap to clone; every clone shares the config and the store.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Storage client shared with the tool routes.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    store: SharedStore,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over the given store.
    pub fn new(config: Config, store: SharedStore) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(store.clone()),
            config: Arc::new(config),
            store,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Usage notes sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        ToolRegistry::new(self.store.clone())
            .call_tool(name, arguments)
            .await
    }

    /// Whether the backing store answers a ping.
    #[cfg(feature = "http")]
    pub async fn store_reachable(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::MemoryProductStore;

    fn test_server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(MemoryProductStore::new()))
    }

    #[test]
    fn test_server_identity() {
        let server = test_server();
        assert_eq!(server.name(), "product-catalog");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_list_tools_has_schemas() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 2);
        for tool in tools {
            assert!(tool["inputSchema"].is_object());
        }
    }

    #[test]
    fn test_info_advertises_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }
}
