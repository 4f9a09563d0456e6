use axum::{http::StatusCode, response::IntoResponse};

/// Tag for grouping public endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/api",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "API is up")
    ),
)]
pub async fn index() -> impl IntoResponse {
    StatusCode::OK
}
