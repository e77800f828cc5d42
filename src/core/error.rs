//! Error types and handling for the catalog service.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, used while starting the service.

use thiserror::Error;

/// A specialized Result type for catalog service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the catalog service.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the catalog domain.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::catalog::CatalogError),

    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
