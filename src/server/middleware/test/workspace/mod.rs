use axum::http::{HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    middleware::workspace::{WorkspaceGuard, WORKSPACE_ID_HEADER},
};

mod resolve;

fn workspace_header(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(WORKSPACE_ID_HEADER, HeaderValue::from_str(value).unwrap());
    headers
}
