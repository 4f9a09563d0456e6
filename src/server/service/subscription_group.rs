use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

use crate::server::{
    data::{
        subscription_group::SubscriptionGroupRepository, user_event::UserEventRepository,
        user_property_assignment::UserPropertyAssignmentRepository,
    },
    error::AppError,
    model::{
        subscription_group::{SubscriptionGroup, UpsertSubscriptionGroupParam},
        user_event::{InsertUserEvent, SUBSCRIBE_ACTION, SUBSCRIPTION_CHANGE_EVENT},
        user_property::EMAIL_PROPERTY_NAME,
    },
    service::upload::parse_user_upload_rows,
};

pub struct SubscriptionGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a subscription group along with its internal segment
    pub async fn upsert(
        &self,
        param: UpsertSubscriptionGroupParam,
    ) -> Result<SubscriptionGroup, AppError> {
        SubscriptionGroupRepository::new(self.db).upsert(param).await
    }

    /// Subscribes every user listed in an uploaded CSV to a subscription group.
    ///
    /// Rows without an id are resolved by email against the workspace's `email` user
    /// property in one batch; rows that still have no id get a fresh one. Each row then
    /// yields a subscription change track event followed by an identify event carrying
    /// the row's cells as traits. All events share one timestamp and are inserted in a
    /// single statement.
    ///
    /// # Arguments
    /// - `workspace_id` - Workspace the users belong to
    /// - `subscription_group_id` - Group the users are subscribed to
    /// - `csv` - Raw CSV upload
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of events written
    /// - `Err(AppError::UploadErr(_))` - CSV was malformed or had invalid rows; nothing
    ///   was written
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn upload_csv(
        &self,
        workspace_id: Uuid,
        subscription_group_id: &str,
        csv: &[u8],
    ) -> Result<usize, AppError> {
        let rows = parse_user_upload_rows(csv)?;

        tracing::debug!("Parsed {} rows for workspace: {}", rows.len(), workspace_id);

        let emails_without_ids: Vec<String> = rows
            .iter()
            .filter(|row| row.id.is_none())
            .filter_map(|row| row.email.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let user_ids_by_email = UserPropertyAssignmentRepository::new(self.db)
            .find_user_ids_by_value(workspace_id, EMAIL_PROPERTY_NAME, &emails_without_ids)
            .await?;

        let timestamp = Utc::now();
        let mut events = Vec::with_capacity(rows.len() * 2);

        for row in rows {
            let user_id = row
                .id
                .clone()
                .or_else(|| {
                    row.email
                        .as_ref()
                        .and_then(|email| user_ids_by_email.get(email))
                        .and_then(|ids| ids.first().cloned())
                })
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            events.push(InsertUserEvent::track(
                Uuid::new_v4().to_string(),
                user_id.clone(),
                SUBSCRIPTION_CHANGE_EVENT,
                json!({
                    "subscriptionId": subscription_group_id,
                    "action": SUBSCRIBE_ACTION,
                }),
                timestamp,
            )?);
            events.push(InsertUserEvent::identify(
                Uuid::new_v4().to_string(),
                user_id,
                row.traits_json(),
                timestamp,
            )?);
        }

        let count = events.len();
        UserEventRepository::new(self.db)
            .insert_many(workspace_id, events)
            .await?;

        Ok(count)
    }
}
