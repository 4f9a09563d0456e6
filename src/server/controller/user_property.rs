use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    model::{
        api::{DeleteResourceDto, ErrorDto},
        user_property::{UpsertUserPropertyDto, UserPropertyDto},
    },
    server::{
        error::AppError,
        extract::Json,
        model::{user_property::UpsertUserPropertyParam, workspace::Workspace},
        service::user_property::UserPropertyService,
        state::AppState,
    },
};

/// Tag for grouping user property endpoints in OpenAPI documentation
pub static USER_PROPERTY_TAG: &str = "user-property";

/// Create or update a user property.
///
/// # Returns
/// - `200 OK` - The stored user property
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/user-properties",
    tag = USER_PROPERTY_TAG,
    request_body = UpsertUserPropertyDto,
    responses(
        (status = 200, description = "Successfully stored user property", body = UserPropertyDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_user_property(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUserPropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserPropertyService::new(&state.db);

    let property = service
        .upsert(UpsertUserPropertyParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}

/// Delete a user property and its assignments from the request's workspace.
///
/// # Returns
/// - `204 No Content` - Successfully deleted user property
/// - `404 Not Found` - No user property with that id in the workspace
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/user-properties",
    tag = USER_PROPERTY_TAG,
    request_body = DeleteResourceDto,
    responses(
        (status = 204, description = "Successfully deleted user property"),
        (status = 404, description = "User property not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user_property(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Json(payload): Json<DeleteResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserPropertyService::new(&state.db);

    let deleted = service.delete(workspace.id, payload.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
