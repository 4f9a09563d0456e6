use crate::server::{
    data::user_event::UserEventRepository, error::AppError, model::user_event::InsertUserEvent,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Map};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod get_paginated_by_workspace;

fn identify(message_id: &str, user_id: &str) -> InsertUserEvent {
    InsertUserEvent::identify(
        message_id.to_string(),
        user_id.to_string(),
        Map::new(),
        Utc::now(),
    )
    .unwrap()
}
