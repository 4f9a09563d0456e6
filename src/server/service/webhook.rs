//! SendGrid event webhook ingestion.
//!
//! SendGrid posts batches of delivery events. Events tagged with `workspaceId` and
//! `userId` custom args are recorded as internal track events so they show up in the
//! user's event history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

use crate::{
    model::webhook::SendgridEventDto,
    server::{
        data::{user_event::UserEventRepository, workspace::WorkspaceRepository},
        error::AppError,
        model::user_event::InsertUserEvent,
        util::parse::parse_hyphenated_uuid,
    },
};

/// Maps a SendGrid event type to the internal track event name.
///
/// Returns `None` for event types that are not recorded (`processed`, `deferred`, ...).
pub fn internal_event_name(sendgrid_event: &str) -> Option<&'static str> {
    match sendgrid_event {
        "delivered" => Some("DFEmailDelivered"),
        "open" => Some("DFEmailOpened"),
        "click" => Some("DFEmailClicked"),
        "bounce" => Some("DFEmailBounced"),
        "dropped" => Some("DFEmailDropped"),
        "spamreport" => Some("DFEmailMarkedSpam"),
        _ => None,
    }
}

pub struct WebhookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebhookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a batch of SendGrid events as track events.
    ///
    /// Events missing either custom arg, carrying an unmapped type, or addressed to an
    /// unknown workspace are skipped. The SendGrid event id becomes the message id, so a
    /// redelivered batch is ignored on insert.
    ///
    /// # Arguments
    /// - `events` - Raw SendGrid webhook batch
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of events kept for insertion
    /// - `Err(AppError)` - Database error or payload serialization failure
    pub async fn handle_sendgrid_events(
        &self,
        events: Vec<SendgridEventDto>,
    ) -> Result<usize, AppError> {
        let mut events_by_workspace: BTreeMap<Uuid, Vec<InsertUserEvent>> = BTreeMap::new();

        for event in events {
            let Some(event_name) = internal_event_name(&event.event) else {
                continue;
            };
            let (Some(workspace_id), Some(user_id)) = (
                event.workspace_id.as_deref().and_then(parse_hyphenated_uuid),
                event.user_id.clone(),
            ) else {
                continue;
            };

            let occurred_at = DateTime::<Utc>::from_timestamp(event.timestamp, 0)
                .unwrap_or_else(Utc::now);

            let insert = InsertUserEvent::track(
                event.sg_event_id,
                user_id,
                event_name,
                json!({
                    "email": event.email,
                    "sgMessageId": event.sg_message_id,
                }),
                occurred_at,
            )?;

            events_by_workspace
                .entry(workspace_id)
                .or_default()
                .push(insert);
        }

        let workspace_repo = WorkspaceRepository::new(self.db);
        let event_repo = UserEventRepository::new(self.db);
        let mut count = 0;

        for (workspace_id, events) in events_by_workspace {
            if workspace_repo.find_by_id(workspace_id).await?.is_none() {
                tracing::warn!(
                    "Skipping {} SendGrid events for unknown workspace {}",
                    events.len(),
                    workspace_id
                );
                continue;
            }

            count += events.len();
            event_repo.insert_many(workspace_id, events).await?;
        }

        Ok(count)
    }
}
