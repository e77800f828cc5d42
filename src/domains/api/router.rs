//! Route table for the REST API.

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{create_product, get_product, health_check, list_products, root_handler};
use crate::domains::catalog::SharedStore;

/// Application state shared across REST handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage client, injected at startup.
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// Build the REST router.
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
