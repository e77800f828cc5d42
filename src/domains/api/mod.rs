//! REST API domain module.
//!
//! Exposes the catalog over HTTP:
//!
//! | Method | Path             | Status        |
//! |--------|------------------|---------------|
//! | GET    | `/products`      | 200           |
//! | GET    | `/products/{id}` | 200, 404      |
//! | POST   | `/products`      | 201, 400, 422 |
//! | GET    | `/health`        | 200, 503      |
//!
//! Errors are rendered as `{"detail": "..."}`.

mod error;
mod handlers;
mod router;
mod server;

pub use error::ApiError;
pub use router::{AppState, build_router};
pub use server::ApiServer;
