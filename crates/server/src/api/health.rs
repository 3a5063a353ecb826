//! Liveness check.

use axum::http::header;
use axum::response::IntoResponse;

/// Tag for OpenAPI documentation.
pub const OPS_TAG: &str = "Operations";

/// Answers `ok` without contacting the auth backend.
#[utoipa::path(
    method(get, head),
    path = "/healthz",
    tag = OPS_TAG,
    operation_id = "Liveness",
    responses(
        (status = 200, description = "Process is serving requests", body = str, content_type = "text/plain", example = "ok")
    )
)]
pub async fn health() -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], "ok")
}
