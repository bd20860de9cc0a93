//! hello-responder: a minimal HTTP endpoint.
//!
//! Answers `GET /hello` with `200 OK` and the body `OK`. Everything else is
//! left to axum's default routing behavior.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use http::{start_server, ServerError};
pub use routes::create_router;
