//! User event data repository.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::user_event::{InsertUserEvent, UserEvent},
};

/// Maximum number of events written by one insert statement.
const INSERT_CHUNK_SIZE: usize = 1000;

/// Repository providing database operations for user events.
pub struct UserEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserEventRepository<'a> {
    /// Creates a new UserEventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserEventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a batch of events into a workspace.
    ///
    /// Events are written in chunks of `INSERT_CHUNK_SIZE` inside one transaction, so a
    /// large batch stays under the database's bind parameter limit and is still
    /// all-or-nothing. Events whose message id already exists are skipped.
    ///
    /// # Arguments
    /// - `workspace_id` - Workspace the events belong to
    /// - `events` - Events to insert
    ///
    /// # Returns
    /// - `Ok(())` - Events inserted (returns early if the batch is empty)
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn insert_many(
        &self,
        workspace_id: Uuid,
        events: Vec<InsertUserEvent>,
    ) -> Result<(), AppError> {
        if events.is_empty() {
            return Ok(());
        }

        let workspace_id = workspace_id.to_string();
        let models: Vec<_> = events
            .into_iter()
            .map(|event| entity::user_event::ActiveModel {
                workspace_id: ActiveValue::Set(workspace_id.clone()),
                message_id: ActiveValue::Set(event.message_id),
                user_id: ActiveValue::Set(event.user_id),
                event_type: ActiveValue::Set(event.event_type),
                event_name: ActiveValue::Set(event.event_name),
                message_raw: ActiveValue::Set(event.message_raw),
                occurred_at: ActiveValue::Set(event.occurred_at),
                ..Default::default()
            })
            .collect();

        let txn = self.db.begin().await?;

        for chunk in models.chunks(INSERT_CHUNK_SIZE) {
            entity::prelude::UserEvent::insert_many(chunk.to_vec())
                .on_conflict(
                    OnConflict::column(entity::user_event::Column::MessageId)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Gets the events of a workspace with pagination, newest first.
    ///
    /// # Arguments
    /// - `workspace_id` - Workspace to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of events to return per page
    ///
    /// # Returns
    /// - `Ok((events, total))` - Events for the requested page and total event count
    /// - `Err(AppError)` - Database error or a stored payload failed to decode
    pub async fn get_paginated_by_workspace(
        &self,
        workspace_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<UserEvent>, u64), AppError> {
        let paginator = entity::prelude::UserEvent::find()
            .filter(entity::user_event::Column::WorkspaceId.eq(workspace_id.to_string()))
            .order_by_desc(entity::user_event::Column::OccurredAt)
            .order_by_desc(entity::user_event::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(UserEvent::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((events, total))
    }
}
