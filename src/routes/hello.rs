//! The `/hello` responder.

use axum::{http::StatusCode, Extension};
use tracing::instrument;

use crate::config::HELLO_BODY;
use crate::middleware::RequestId;

/// Hello handler.
///
/// Stateless and infallible: every matching request gets `200` with the body `OK`.
#[instrument(name = "hello::hello", skip(request_id), fields(request_id = %request_id.0))]
pub async fn hello(Extension(request_id): Extension<RequestId>) -> (StatusCode, &'static str) {
    tracing::debug!("Serving hello");
    (StatusCode::OK, HELLO_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_hello_is_fixed() {
        let request_id = RequestId(Uuid::new_v4());
        let first = hello(Extension(request_id)).await;
        assert_eq!(first, (StatusCode::OK, "OK"));
        assert_eq!(first, hello(Extension(RequestId(Uuid::new_v4()))).await);
    }
}
