//! REST API error responses.
//!
//! Every failure is rendered as `{"detail": "..."}` with a status chosen by
//! the error kind.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::domains::catalog::CatalogError;

/// Errors returned by REST handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Catalog failure (not found, validation, storage).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The request body could not be read as a write shape.
    #[error(transparent)]
    Body(#[from] JsonRejection),

    /// The path parameter is not a valid product id.
    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::Catalog(CatalogError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Product not found".to_string())
            }
            Self::Catalog(CatalogError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            Self::Catalog(CatalogError::Storage(e)) => {
                error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
            Self::Path(rejection) => (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_client_error() {
            warn!("Rejected request ({}): {}", status.as_u16(), detail);
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, detail) = ApiError::from(CatalogError::NotFound(7)).status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Product not found");
    }

    #[test]
    fn test_validation_maps_to_422() {
        let err = ApiError::from(CatalogError::validation("name: too short"));
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail, "name: too short");
    }

    #[test]
    fn test_storage_fault_hides_details() {
        let err = ApiError::from(CatalogError::Storage(sqlx::Error::PoolTimedOut));
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Internal server error");
    }
}
