//! MCP over stdin/stdout, the mode MCP clients use when they spawn
//! `catalog_mcp` as a subprocess.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::handshake)?;
        info!("MCP client connected over stdio");

        let reason = running.waiting().await.map_err(TransportError::serve)?;
        info!("MCP stdio session ended: {:?}", reason);
        Ok(())
    }
}
