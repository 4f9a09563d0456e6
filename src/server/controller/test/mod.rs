use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    error::AppError,
    middleware::workspace::{SUBSCRIPTION_GROUP_ID_HEADER, WORKSPACE_ID_HEADER},
    router,
    state::AppState,
};


const DEFAULT_WORKSPACE: &str = "Default";
const BOUNDARY: &str = "engagement-test-boundary";

fn app(db: &DatabaseConnection) -> Router {
    router::router(AppState::new(db.clone(), DEFAULT_WORKSPACE.to_string()))
}

fn json_request(method: Method, uri: &str, workspace_id: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(WORKSPACE_ID_HEADER, workspace_id)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str, workspace_id: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(WORKSPACE_ID_HEADER, workspace_id)
        .body(Body::empty())
        .unwrap()
}

/// Multipart request carrying `csv` under `field`.
fn upload_request(
    workspace_id: &str,
    subscription_group_id: &str,
    field: &str,
    csv: &str,
) -> Request<Body> {
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"users.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n--{boundary}--\r\n",
        boundary = BOUNDARY,
        field = field,
        csv = csv,
    );

    Request::builder()
        .method(Method::POST)
        .uri("/api/subscription-groups/upload-csv")
        .header(WORKSPACE_ID_HEADER, workspace_id)
        .header(SUBSCRIPTION_GROUP_ID_HEADER, subscription_group_id)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
