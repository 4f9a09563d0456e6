use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Extension,
};

use crate::{
    model::{
        api::ErrorDto,
        subscription_group::{
            SubscriptionGroupDto, UploadCsvErrorDto, UploadCsvForm, UpsertSubscriptionGroupDto,
        },
    },
    server::{
        error::{upload::UploadError, AppError},
        extract::Json,
        middleware::workspace::{SUBSCRIPTION_GROUP_ID_HEADER, WORKSPACE_ID_HEADER},
        model::{subscription_group::UpsertSubscriptionGroupParam, workspace::Workspace},
        service::subscription_group::SubscriptionGroupService,
        state::AppState,
    },
};

/// Tag for grouping subscription group endpoints in OpenAPI documentation
pub static SUBSCRIPTION_GROUP_TAG: &str = "subscription-group";

/// Multipart field holding the uploaded CSV.
const CSV_FIELD: &str = "csv";

/// Create or update a subscription group.
///
/// Writes the group and, when missing, its internal `subscriptionGroup-{id}` segment
/// in one transaction. An existing segment is left untouched.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Group id, workspace, name and type
///
/// # Returns
/// - `200 OK` - The stored subscription group
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error or aborted transaction
#[utoipa::path(
    put,
    path = "/api/subscription-groups",
    tag = SUBSCRIPTION_GROUP_TAG,
    request_body = UpsertSubscriptionGroupDto,
    responses(
        (status = 200, description = "Successfully stored subscription group", body = SubscriptionGroupDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_subscription_group(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSubscriptionGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionGroupService::new(&state.db);

    let group = service
        .upsert(UpsertSubscriptionGroupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Subscribe the users listed in a CSV file to a subscription group.
///
/// The CSV needs a header row and an `id` or `email` cell on every data row. Every
/// other column is stored as a user trait. Rows without an id are matched to existing
/// users by email; unmatched rows get a new user id.
///
/// Both `df-workspace-id` and `df-subscription-group-id` headers are required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `workspace` - Workspace resolved from `df-workspace-id`
/// - `headers` - Request headers carrying the subscription group id
/// - `multipart` - Form with a `csv` field
///
/// # Returns
/// - `200 OK` - Events for every row were recorded
/// - `400 Bad Request` - Missing header, missing `csv` field, unreadable CSV, or invalid
///   rows (with per-row errors)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/subscription-groups/upload-csv",
    tag = SUBSCRIPTION_GROUP_TAG,
    params(
        ("df-workspace-id" = String, Header, description = "Workspace UUID"),
        ("df-subscription-group-id" = String, Header, description = "Subscription group id")
    ),
    request_body(content = UploadCsvForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully recorded subscription events"),
        (status = 400, description = "Misformatted file or missing header", body = UploadCsvErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_csv(
    State(state): State<AppState>,
    Extension(workspace): Extension<Workspace>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    if !headers.contains_key(WORKSPACE_ID_HEADER) {
        return Err(AppError::BadRequest(format!(
            "Missing required header '{}'",
            WORKSPACE_ID_HEADER
        )));
    }

    let Some(subscription_group_id) = headers
        .get(SUBSCRIPTION_GROUP_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    else {
        return Err(AppError::BadRequest(format!(
            "Missing required header '{}'",
            SUBSCRIPTION_GROUP_ID_HEADER
        )));
    };

    let mut multipart = multipart.map_err(|e| UploadError::MissingFile(e.body_text()))?;
    let csv = read_csv_field(&mut multipart).await?;

    let service = SubscriptionGroupService::new(&state.db);

    let count = service
        .upload_csv(workspace.id, subscription_group_id, &csv)
        .await?;

    tracing::debug!(
        "Recorded {} subscription events for group {}",
        count,
        subscription_group_id
    );

    Ok(StatusCode::OK)
}

async fn read_csv_field(multipart: &mut Multipart) -> Result<Bytes, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::MissingFile(e.body_text()))?
    {
        if field.name() == Some(CSV_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|e| UploadError::MissingFile(e.body_text()));
        }
    }

    Err(UploadError::MissingFile(format!(
        "No '{}' field in form",
        CSV_FIELD
    )))
}
