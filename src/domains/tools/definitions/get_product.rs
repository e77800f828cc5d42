//! Get product tool definition.
//!
//! Looks up one product by id. An unknown id is not a tool failure: the tool
//! succeeds with `{"error": "Product not found"}` so callers can branch on
//! the payload.

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
use crate::domains::catalog::{CatalogError, ProductRead, ProductStore, SharedStore};

#[cfg(feature = "http")]
use super::common::to_http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get product tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProductParams {
    /// Identifier of the product to fetch.
    #[schemars(description = "Identifier of the product to fetch")]
    pub product_id: i32,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get product tool - returns a single product by id.
pub struct GetProductTool;

impl GetProductTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_product";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieve details of a specific product by its ID.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(product_id = params.product_id))]
    pub async fn execute(params: &GetProductParams, store: &dyn ProductStore) -> CallToolResult {
        let product = match store.get(params.product_id).await {
            Ok(Some(row)) => ProductRead::from(row),
            Ok(None) => {
                info!("Product {} not found", params.product_id);
                let sentinel = serde_json::json!({
                    "error": CatalogError::NotFound(params.product_id).to_string()
                });
                return json_result(&sentinel, Some(sentinel.clone()));
            }
            Err(e) => {
                return error_result(&format!(
                    "Failed to load product {}: {}",
                    params.product_id, e
                ));
            }
        };

        match serde_json::to_value(&product) {
            Ok(value) => json_result(&value, Some(value.clone())),
            Err(e) => error_result(&format!("Failed to serialize product: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        store: SharedStore,
    ) -> Result<serde_json::Value, ToolError> {
        let product_id = arguments
            .get("product_id")
            .and_then(|v| v.as_i64())
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'product_id' parameter"))?;

        let params = GetProductParams { product_id };
        let result = Self::execute(&params, store.as_ref()).await;
        Ok(to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetProductParams>(),
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
                let params: GetProductParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{MemoryProductStore, ProductCreate};
    use crate::domains::tools::definitions::common::first_text;
    use rust_decimal::Decimal;

    #[test]
    fn test_params_require_product_id() {
        assert!(serde_json::from_str::<GetProductParams>("{}").is_err());
        let params: GetProductParams = serde_json::from_str(r#"{"product_id": 3}"#).unwrap();
        assert_eq!(params.product_id, 3);
    }

    #[tokio::test]
    async fn test_get_existing_product() {
        let store = MemoryProductStore::new();
        let created = store
            .create(&ProductCreate::new("Widget", Decimal::new(999, 2), None))
            .await
            .unwrap();

        let params = GetProductParams {
            product_id: created.id,
        };
        let result = GetProductTool::execute(&params, &store).await;
        assert_eq!(result.is_error, Some(false));

        let product: ProductRead = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(product.id, created.id);
        assert_eq!(product.name, "Widget");
        assert!(product.description.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_sentinel() {
        let store = MemoryProductStore::new();
        let params = GetProductParams { product_id: 404 };
        let result = GetProductTool::execute(&params, &store).await;

        assert_eq!(result.is_error, Some(false));
        let body: serde_json::Value = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Product not found"}));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_get_http_handler_missing_param() {
        let store: SharedStore = std::sync::Arc::new(MemoryProductStore::new());
        let result = GetProductTool::http_handler(serde_json::json!({}), store).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_get_http_handler_sentinel() {
        let store: SharedStore = std::sync::Arc::new(MemoryProductStore::new());
        let response = GetProductTool::http_handler(serde_json::json!({"product_id": 1}), store)
            .await
            .unwrap();
        assert_eq!(response["isError"], false);
        assert_eq!(response["structuredContent"]["error"], "Product not found");
    }
}
