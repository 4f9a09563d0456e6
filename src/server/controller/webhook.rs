use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{api::ErrorDto, webhook::SendgridEventDto},
    server::{
        error::AppError, extract::Json, service::webhook::WebhookService, state::AppState,
    },
};

/// Tag for grouping webhook endpoints in OpenAPI documentation
pub static WEBHOOK_TAG: &str = "webhook";

/// Receive a batch of SendGrid delivery events.
///
/// Delivery, open, click, bounce, drop and spam report events tagged with `workspaceId`
/// and `userId` custom args are recorded as track events. Everything else is dropped.
/// Signatures are not verified.
///
/// # Returns
/// - `200 OK` - Batch processed
/// - `400 Bad Request` - Body is not an array of SendGrid events
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/webhooks/sendgrid",
    tag = WEBHOOK_TAG,
    request_body = Vec<SendgridEventDto>,
    responses(
        (status = 200, description = "Successfully processed events"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sendgrid_events(
    State(state): State<AppState>,
    Json(payload): Json<Vec<SendgridEventDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = WebhookService::new(&state.db);

    let recorded = service.handle_sendgrid_events(payload).await?;

    tracing::debug!("Recorded {} SendGrid events", recorded);

    Ok(StatusCode::OK)
}
