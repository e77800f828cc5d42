//! REST API listener.

use tokio::net::TcpListener;
use tracing::info;

use super::router::{AppState, build_router};
use crate::core::config::ApiConfig;
use crate::core::transport::{TransportError, TransportResult};
use crate::domains::catalog::SharedStore;

/// HTTP server for the product endpoints.
pub struct ApiServer {
    config: ApiConfig,
    store: SharedStore,
}

impl ApiServer {
    /// Create a new API server over the given store.
    pub fn new(config: ApiConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    /// Bind the listener and serve until Ctrl+C.
    pub async fn run(self) -> TransportResult<()> {
        let addr = self.config.address();
        let app = build_router(AppState::new(self.store), self.config.enable_cors);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on http://{}", addr);
        info!("  → GET    /products");
        info!("  → GET    /products/{{id}}");
        info!("  → POST   /products");
        info!("  → GET    /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(TransportError::serve)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
