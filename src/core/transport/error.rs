//! Listener and transport failures.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Failures while starting or running a listener.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP client went away before initialization completed.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// The server loop stopped with an error.
    #[error("Server stopped: {0}")]
    Serve(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(err: impl std::fmt::Display) -> Self {
        Self::Handshake(err.to_string())
    }

    pub fn serve(err: impl std::fmt::Display) -> Self {
        Self::Serve(err.to_string())
    }
}
