//! List products tool definition.
//!
//! Returns every product in the catalog with its id, name, price and
//! description.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{error_result, json_result};
use crate::domains::catalog::{ProductRead, ProductStore, SharedStore};

#[cfg(feature = "http")]
use super::common::to_http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// The list tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProductsParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// List products tool - returns the whole catalog.
pub struct ListProductsTool;

impl ListProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all available products with their ID, name, price, and description.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(_params: &ListProductsParams, store: &dyn ProductStore) -> CallToolResult {
        let products = match store.list().await {
            Ok(rows) => rows.into_iter().map(ProductRead::from).collect::<Vec<_>>(),
            Err(e) => return error_result(&format!("Failed to list products: {}", e)),
        };

        info!("list_products returning {} products", products.len());

        match serde_json::to_value(&products) {
            Ok(list) => {
                let structured = serde_json::json!({ "products": list.clone() });
                json_result(&list, Some(structured))
            }
            Err(e) => error_result(&format!("Failed to serialize products: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        store: SharedStore,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListProductsParams = if arguments.is_null() {
            ListProductsParams::default()
        } else {
            serde_json::from_value(arguments)
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?
        };

        let result = Self::execute(&params, store.as_ref()).await;
        Ok(to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListProductsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(store: SharedStore) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: ListProductsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, store.as_ref()).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
