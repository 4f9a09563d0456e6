use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        settings::{EmailProviderDto, UpsertEmailProviderDto},
    },
    server::{
        error::AppError, extract::Json, model::email_provider::UpsertEmailProviderParam,
        service::settings::SettingsService, state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Create or update the workspace's email provider of the given type.
///
/// There is at most one provider per type and workspace; an existing provider has its
/// API key replaced. The key is never returned.
///
/// # Returns
/// - `200 OK` - The stored provider
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/settings/email-providers",
    tag = SETTINGS_TAG,
    request_body = UpsertEmailProviderDto,
    responses(
        (status = 200, description = "Successfully stored email provider", body = EmailProviderDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_email_provider(
    State(state): State<AppState>,
    Json(payload): Json<UpsertEmailProviderDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);

    let provider = service
        .upsert_email_provider(UpsertEmailProviderParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(provider.into_dto())))
}
