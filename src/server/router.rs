use axum::{
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        content, dashboard, debug, event, index, journey, segment, settings, subscription_group,
        user, user_property, webhook,
    },
    docs::ApiDoc,
    error::{config::ConfigError, AppError},
    middleware::workspace::{require_workspace, SUBSCRIPTION_GROUP_ID_HEADER, WORKSPACE_ID_HEADER},
    state::AppState,
};

/// Builds the application router.
///
/// Routes under `/api` (except the index and webhooks) and the dashboard loader run
/// behind the workspace middleware. The subscription group upsert also answers with a
/// trailing slash. The OpenAPI document is served with Swagger UI at
/// `/api/docs`.
pub fn router(state: AppState) -> Router {
    let authorized = OpenApiRouter::new()
        .routes(routes!(subscription_group::upsert_subscription_group))
        .route(
            "/api/subscription-groups/",
            put(subscription_group::upsert_subscription_group),
        )
        .routes(routes!(subscription_group::upload_csv))
        .routes(routes!(journey::upsert_journey, journey::delete_journey))
        .routes(routes!(segment::upsert_segment, segment::delete_segment))
        .routes(routes!(content::upsert_template, content::delete_template))
        .routes(routes!(
            user_property::upsert_user_property,
            user_property::delete_user_property
        ))
        .routes(routes!(user::get_users))
        .routes(routes!(event::get_events))
        .routes(routes!(settings::upsert_email_provider))
        .route("/dashboard/journeys/{id}", get(dashboard::journey_page))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_workspace,
        ));

    let public = OpenApiRouter::new()
        .routes(routes!(index::index))
        .routes(routes!(webhook::sendgrid_events))
        .route("/internal-api/debug/boom", get(debug::boom));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(authorized)
        .merge(public)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Builds a CORS layer allowing the dashboard at `origin` to call the API.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer for the origin
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `origin` is not a valid header value
pub fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(WORKSPACE_ID_HEADER),
            HeaderName::from_static(SUBSCRIPTION_GROUP_ID_HEADER),
        ]))
}
