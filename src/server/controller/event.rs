use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        event::PaginatedUserEventsDto,
    },
    server::{
        error::AppError, extract::Json, model::workspace::Workspace,
        service::user_event::UserEventService, state::AppState,
        util::pagination::validate_page_size,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Get paginated user events of the request's workspace, newest first.
///
/// # Returns
/// - `200 OK` - Paginated list of events
/// - `400 Bad Request` - `entries` is 0
/// - `500 Internal Server Error` - Database error or unreadable stored payload
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedUserEventsDto),
        (status = 400, description = "Page size is zero", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_page_size(params.entries)?;

    let service = UserEventService::new(&state.db);

    let events = service
        .get_paginated(workspace.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}
