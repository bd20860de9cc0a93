//! HTTP server module.
//!
//! Serves the router over plain HTTP with graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve_listener, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
