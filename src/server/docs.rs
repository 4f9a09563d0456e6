use utoipa::OpenApi;

/// Root OpenAPI document; paths and schemas are collected from the routers.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Engagement API",
        description = "Journeys, segments, subscription groups and user data of a workspace."
    ),
    tags(
        (name = "journey", description = "Marketing automation flows"),
        (name = "segment", description = "Audience definitions"),
        (name = "subscription-group", description = "Opt-in and opt-out lists"),
        (name = "content", description = "Message templates"),
        (name = "user-property", description = "Computed user attributes"),
        (name = "user", description = "Users with their property values"),
        (name = "event", description = "Recorded identify and track events"),
        (name = "settings", description = "Workspace settings"),
        (name = "webhook", description = "Inbound provider webhooks"),
        (name = "index", description = "Public endpoints")
    )
)]
pub struct ApiDoc;
