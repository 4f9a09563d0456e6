use crate::{
    model::webhook::SendgridEventDto,
    server::{error::AppError, service::webhook::WebhookService},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod handle_sendgrid_events;

fn sendgrid_event(
    event: &str,
    workspace_id: Option<String>,
    user_id: Option<&str>,
) -> SendgridEventDto {
    SendgridEventDto {
        email: Some("user@example.com".to_string()),
        timestamp: 1_700_000_000,
        event: event.to_string(),
        sg_event_id: Uuid::new_v4().to_string(),
        sg_message_id: Some("sg-message".to_string()),
        workspace_id,
        user_id: user_id.map(str::to_string),
    }
}
