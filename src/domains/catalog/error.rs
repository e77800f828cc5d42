//! Catalog-specific error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while reading or writing products.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product matches the requested identifier.
    #[error("Product not found")]
    NotFound(i32),

    /// The write shape failed validation before reaching storage.
    #[error("{0}")]
    Validation(String),

    /// The storage engine reported a failure.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl CatalogError {
    /// Create a new "validation" error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();
        messages.sort();

        Self::Validation(messages.join(", "))
    }
}
