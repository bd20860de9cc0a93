//! HTTP route handlers.
//!
//! The router registers a single `GET /hello` route. Unknown paths and
//! methods fall through to axum's default 404 and 405 responses.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod hello;

use axum::{middleware, routing::get, Router};

use crate::config::HELLO_PATH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with the hello route and request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route(HELLO_PATH, get(hello::hello))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
