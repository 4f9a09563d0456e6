use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    model::{
        api::{DeleteResourceDto, ErrorDto},
        content::{MessageTemplateDto, UpsertEmailTemplateDto},
    },
    server::{
        error::AppError,
        extract::Json,
        model::{email_template::UpsertEmailTemplateParam, workspace::Workspace},
        service::content::ContentService,
        state::AppState,
    },
};

/// Tag for grouping message template endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

/// Create or update an email template.
///
/// # Returns
/// - `200 OK` - The stored template as a message template resource
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/content/templates",
    tag = CONTENT_TAG,
    request_body = UpsertEmailTemplateDto,
    responses(
        (status = 200, description = "Successfully stored template", body = MessageTemplateDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_template(
    State(state): State<AppState>,
    Json(payload): Json<UpsertEmailTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContentService::new(&state.db);

    let template = service
        .upsert_template(UpsertEmailTemplateParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(template.into_dto())))
}

/// Delete an email template from the request's workspace.
///
/// # Returns
/// - `204 No Content` - Successfully deleted template
/// - `404 Not Found` - No template with that id in the workspace
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/content/templates",
    tag = CONTENT_TAG,
    request_body = DeleteResourceDto,
    responses(
        (status = 204, description = "Successfully deleted template"),
        (status = 404, description = "Template not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Json(payload): Json<DeleteResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContentService::new(&state.db);

    let deleted = service.delete_template(workspace.id, payload.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
