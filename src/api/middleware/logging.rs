//! Request/response logging, correlated by request id.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info_span;

use super::RequestId;

/// Opens an `http` span around each request and logs method, path,
/// status and latency on completion. Runs after `request_id_middleware`
/// so the span carries the correlation id.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = match request.extensions().get::<RequestId>() {
        Some(id) => id.0.clone(),
        None => "unknown".to_owned(),
    };

    let span = info_span!("http", %method, %path, %request_id);
    let _guard = span.enter();
    tracing::debug!("request received");

    let started = Instant::now();
    let response = next.run(request).await;

    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );
    response
}
