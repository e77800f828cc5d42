//! MCP over plain HTTP.
//!
//! Each POST to the configured path carries one JSON-RPC 2.0 message and
//! gets one reply back, so curl or a browser can list and call the catalog
//! tools without a session. This listener is separate from the REST API
//! served by the `product_catalog` binary.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::ToolError;

/// MCP protocol revision reported on initialize.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Inbound JSON-RPC message.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outbound JSON-RPC message. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct RpcReply {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Clone, Serialize)]
struct RpcErrorBody {
    code: i32,
    message: String,
}

/// Protocol-level failures, each with its JSON-RPC code.
#[derive(Debug)]
enum RpcFault {
    BadVersion,
    UnknownMethod(String),
    InvalidParams(String),
}

impl RpcFault {
    fn code(&self) -> i32 {
        match self {
            Self::BadVersion => -32600,
            Self::UnknownMethod(_) => -32601,
            Self::InvalidParams(_) => -32602,
        }
    }

    fn message(self) -> String {
        match self {
            Self::BadVersion => "Invalid Request".to_string(),
            Self::UnknownMethod(message) | Self::InvalidParams(message) => message,
        }
    }
}

impl From<ToolError> for RpcFault {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) => Self::UnknownMethod(err.to_string()),
            ToolError::InvalidArguments(_) => Self::InvalidParams(err.to_string()),
        }
    }
}

impl RpcReply {
    fn new(id: Option<Value>, outcome: Result<Value, RpcFault>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(fault) => (
                None,
                Some(RpcErrorBody {
                    code: fault.code(),
                    message: fault.message(),
                }),
            ),
        };
        Self {
            jsonrpc: "2.0",
            id,
            result,
            error,
        }
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(|e| e.code)
    }
}

/// JSON-RPC over HTTP listener.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Routes: the JSON-RPC endpoint plus `/health`.
    pub fn router(&self, server: McpServer) -> Router {
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .with_state(server);

        if !self.config.enable_cors {
            return app;
        }
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }

    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "MCP JSON-RPC listening on http://{}{}",
            addr, self.config.rpc_path
        );

        axum::serve(listener, app)
            .await
            .map_err(TransportError::serve)
    }
}

async fn health_check(State(server): State<McpServer>) -> impl IntoResponse {
    let (status, database) = if server.store_reachable().await {
        (StatusCode::OK, "connected")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
    };
    (
        status,
        Json(json!({
            "status": if status.is_success() { "healthy" } else { "unhealthy" },
            "database": database,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

#[instrument(skip_all, fields(method = %request.method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcReply> {
    Json(dispatch(&server, request).await)
}

async fn dispatch(server: &McpServer, request: RpcRequest) -> RpcReply {
    let RpcRequest {
        jsonrpc,
        id,
        method,
        params,
    } = request;

    if jsonrpc != "2.0" {
        return RpcReply::new(id, Err(RpcFault::BadVersion));
    }

    let outcome = match method.as_str() {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": server.name(), "version": server.version() },
            "instructions": server.instructions(),
        })),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": server.list_tools() })),
        "tools/call" => call_tool(server, params).await,
        // stateless, nothing to acknowledge
        m if m.starts_with("notifications/") => {
            debug!("Ignoring notification {}", m);
            Ok(Value::Null)
        }
        other => {
            warn!("Unknown JSON-RPC method: {}", other);
            Err(RpcFault::UnknownMethod(format!("Method not found: {other}")))
        }
    };

    RpcReply::new(id, outcome)
}

async fn call_tool(server: &McpServer, params: Option<Value>) -> Result<Value, RpcFault> {
    let params = params.ok_or_else(|| RpcFault::InvalidParams("Missing params".into()))?;
    let name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| RpcFault::InvalidParams("Missing tool name".into()))?;
    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    Ok(server.call_tool(name, arguments).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::catalog::{MemoryProductStore, ProductCreate, ProductStore};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn request(method: &str, params: Option<Value>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(7)),
            method: method.to_string(),
            params,
        }
    }

    async fn stocked_server() -> McpServer {
        let store = Arc::new(MemoryProductStore::new());
        store
            .create(&ProductCreate::new("Widget", Decimal::new(999, 2), None))
            .await
            .unwrap();
        McpServer::new(Config::default(), store)
    }

    #[tokio::test]
    async fn test_initialize_reports_tools_capability() {
        let reply = dispatch(&stocked_server().await, request("initialize", None)).await;
        let result = reply.result().unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "product-catalog");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_names_both_tools() {
        let reply = dispatch(&stocked_server().await, request("tools/list", None)).await;
        let tools = reply.result().unwrap()["tools"].as_array().unwrap().clone();
        let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert!(names.contains(&"list_products"));
        assert!(names.contains(&"get_product"));
    }

    #[tokio::test]
    async fn test_tools_call_get_product() {
        let params = json!({"name": "get_product", "arguments": {"product_id": 1}});
        let reply = dispatch(&stocked_server().await, request("tools/call", Some(params))).await;
        assert_eq!(reply.result().unwrap()["structuredContent"]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_tools_call_missing_product_is_not_an_rpc_error() {
        let params = json!({"name": "get_product", "arguments": {"product_id": 404}});
        let reply = dispatch(&stocked_server().await, request("tools/call", Some(params))).await;
        assert!(reply.error_code().is_none());
        assert_eq!(
            reply.result().unwrap()["structuredContent"]["error"],
            "Product not found"
        );
    }

    #[tokio::test]
    async fn test_tools_call_error_codes() {
        let server = stocked_server().await;

        let reply = dispatch(&server, request("tools/call", Some(json!({})))).await;
        assert_eq!(reply.error_code(), Some(-32602));

        let params = json!({"name": "delete_product", "arguments": {}});
        let reply = dispatch(&server, request("tools/call", Some(params))).await;
        assert_eq!(reply.error_code(), Some(-32601));

        let params = json!({"name": "get_product", "arguments": {"product_id": "abc"}});
        let reply = dispatch(&server, request("tools/call", Some(params))).await;
        assert_eq!(reply.error_code(), Some(-32602));
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_version() {
        let server = stocked_server().await;

        let reply = dispatch(&server, request("resources/list", None)).await;
        assert_eq!(reply.error_code(), Some(-32601));

        let mut bad = request("ping", None);
        bad.jsonrpc = "1.0".to_string();
        let reply = dispatch(&server, bad).await;
        assert_eq!(reply.error_code(), Some(-32600));
    }

    #[tokio::test]
    async fn test_router_serves_rpc_and_health() {
        let app = HttpTransport::new(HttpConfig::default()).router(stocked_server().await);

        let body = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}).to_string();
        let response = app
            .clone()
            .oneshot(
                Request::post("/mcp")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let reply: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reply["id"], 1);
        assert_eq!(reply["result"], json!({}));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
