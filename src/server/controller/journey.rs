use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    model::{
        api::{DeleteResourceDto, ErrorDto},
        journey::{JourneyDto, UpsertJourneyDto},
    },
    server::{
        error::AppError,
        extract::Json,
        model::{journey::UpsertJourneyParam, workspace::Workspace},
        service::journey::JourneyService,
        state::AppState,
    },
};

/// Tag for grouping journey endpoints in OpenAPI documentation
pub static JOURNEY_TAG: &str = "journey";

/// Create or update a journey.
///
/// New journeys start as `NotStarted`; an omitted status keeps the stored one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Journey id, workspace, name, optional status and definition
///
/// # Returns
/// - `200 OK` - The stored journey
/// - `400 Bad Request` - Malformed body or a definition whose child references do not resolve
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/journeys",
    tag = JOURNEY_TAG,
    request_body = UpsertJourneyDto,
    responses(
        (status = 200, description = "Successfully stored journey", body = JourneyDto),
        (status = 400, description = "Invalid journey definition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_journey(
    State(state): State<AppState>,
    Json(payload): Json<UpsertJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = JourneyService::new(&state.db);

    let journey = service.upsert(UpsertJourneyParam::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(journey.into_dto())))
}

/// Delete a journey from the request's workspace.
///
/// # Returns
/// - `204 No Content` - Successfully deleted journey
/// - `404 Not Found` - No journey with that id in the workspace
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/journeys",
    tag = JOURNEY_TAG,
    request_body = DeleteResourceDto,
    responses(
        (status = 204, description = "Successfully deleted journey"),
        (status = 404, description = "Journey not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_journey(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Json(payload): Json<DeleteResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = JourneyService::new(&state.db);

    let deleted = service.delete(workspace.id, payload.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
