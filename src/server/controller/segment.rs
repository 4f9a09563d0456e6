use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    model::{
        api::{DeleteResourceDto, ErrorDto},
        segment::{SegmentDto, UpsertSegmentDto},
    },
    server::{
        error::AppError,
        extract::Json,
        model::{segment::UpsertSegmentParam, workspace::Workspace},
        service::segment::SegmentService,
        state::AppState,
    },
};

/// Tag for grouping segment endpoints in OpenAPI documentation
pub static SEGMENT_TAG: &str = "segment";

/// Create or update a declarative segment.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Segment id, workspace, name and definition
///
/// # Returns
/// - `200 OK` - The stored segment
/// - `400 Bad Request` - Malformed body or a definition whose child references do not resolve
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/segments",
    tag = SEGMENT_TAG,
    request_body = UpsertSegmentDto,
    responses(
        (status = 200, description = "Successfully stored segment", body = SegmentDto),
        (status = 400, description = "Invalid segment definition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_segment(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSegmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SegmentService::new(&state.db);

    let segment = service.upsert(UpsertSegmentParam::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(segment.into_dto())))
}

/// Delete a declarative segment from the request's workspace.
///
/// Internal segments backing subscription groups are never deleted here and answer 404.
///
/// # Returns
/// - `204 No Content` - Successfully deleted segment
/// - `404 Not Found` - No declarative segment with that id in the workspace
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/segments",
    tag = SEGMENT_TAG,
    request_body = DeleteResourceDto,
    responses(
        (status = 204, description = "Successfully deleted segment"),
        (status = 404, description = "Segment not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_segment(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Json(payload): Json<DeleteResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SegmentService::new(&state.db);

    let deleted = service.delete(workspace.id, payload.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
