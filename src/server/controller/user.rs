use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        user::PaginatedUsersDto,
    },
    server::{
        error::AppError, extract::Json, model::workspace::Workspace, service::user::UserService,
        state::AppState, util::pagination::validate_page_size,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users of the request's workspace.
///
/// Users are the distinct ids holding at least one property assignment. Each user
/// carries its property values keyed by property name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `workspace` - Workspace resolved for the request
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of users
/// - `400 Bad Request` - `entries` is 0
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 400, description = "Page size is zero", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_page_size(params.entries)?;

    let service = UserService::new(&state.db);

    let users = service
        .get_paginated(workspace.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}
