//! REST handlers for the product endpoints.
//!
//! Each handler touches the store once; the store acquires and releases the
//! session for that call.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument, warn};

use super::error::ApiError;
use super::router::AppState;
use crate::domains::catalog::{CatalogError, ProductCreate, ProductRead};

/// `GET /products`
#[instrument(skip_all)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRead>>, ApiError> {
    let products = state.store.list().await?;
    info!("Listing {} products", products.len());

    Ok(Json(products.into_iter().map(ProductRead::from).collect()))
}

/// `GET /products/{id}`
#[instrument(skip_all)]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProductRead>, ApiError> {
    let Path(id) = id?;
    let product = state
        .store
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound(id))?;

    Ok(Json(product.into()))
}

/// `POST /products`
#[instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductRead>), ApiError> {
    let Json(payload) = payload?;
    let product = payload.validated()?;
    let created = state.store.create(&product).await?;
    info!("Created product {} ({})", created.id, created.name);

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "healthy",
                "database": "connected",
                "backend": state.store.backend(),
                "timestamp": timestamp
            })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unhealthy",
                    "database": "unreachable",
                    "backend": state.store.backend(),
                    "timestamp": timestamp
                })),
            )
        }
    }
}

/// `GET /` - provides API info.
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Product Catalog API",
        "description": "A simple API for managing a product catalog",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "list": "GET /products",
            "get": "GET /products/{id}",
            "create": "POST /products",
            "health": "GET /health"
        }
    }))
}
