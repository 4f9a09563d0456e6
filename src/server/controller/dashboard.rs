use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};

use crate::{
    model::dashboard::{NotFoundDto, PagePropsDto},
    server::{
        error::AppError, extract::Json, model::workspace::Workspace,
        service::dashboard::DashboardService, state::AppState,
    },
};

/// GET /dashboard/journeys/{id} - Initial state of the journey editor page
///
/// Responds with `{ serverInitialState }` for the page to hydrate its store from. A
/// journey id that does not exist yet gets a blank journey.
///
/// # Returns
/// - `200 OK`: Page props
/// - `404 Not Found`: `{ notFound: true }` when the id is not a UUID
/// - `500 Internal Server Error`: Database error
pub async fn journey_page(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    Path(journey_id): Path<String>,
) -> Result<Response, AppError> {
    let service = DashboardService::new(&state.db);

    let response = match service.journey_page(workspace, &journey_id).await? {
        Some(server_initial_state) => (
            StatusCode::OK,
            Json(PagePropsDto {
                server_initial_state,
            }),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, Json(NotFoundDto { not_found: true })).into_response(),
    };

    Ok(response)
}
