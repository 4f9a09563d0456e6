//! Segment data repository.
//!
//! Only declarative segments are visible through this repository's listing and delete
//! operations. Internal segments are managed alongside their subscription group.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::segment::SegmentResourceType,
    server::{
        error::AppError,
        model::segment::{Segment, UpsertSegmentParam},
    },
};

/// Repository providing database operations for segments.
pub struct SegmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SegmentRepository<'a> {
    /// Creates a new SegmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SegmentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a declarative segment by id.
    ///
    /// On conflict only `name`, `definition` and `updated_at` change; the resource type of
    /// an existing segment is preserved.
    ///
    /// # Returns
    /// - `Ok(Segment)` - The stored segment
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the name is taken in the workspace
    pub async fn upsert(&self, param: UpsertSegmentParam) -> Result<Segment, AppError> {
        let now = Utc::now();
        let definition = serde_json::to_value(&param.definition)?;

        let entity = entity::prelude::Segment::insert(entity::segment::ActiveModel {
            id: ActiveValue::Set(param.id.to_string()),
            workspace_id: ActiveValue::Set(param.workspace_id.to_string()),
            name: ActiveValue::Set(param.name),
            definition: ActiveValue::Set(definition),
            resource_type: ActiveValue::Set(SegmentResourceType::Declarative.as_str().to_string()),
            subscription_group_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::segment::Column::Id)
                .update_columns([
                    entity::segment::Column::Name,
                    entity::segment::Column::Definition,
                    entity::segment::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Segment::from_entity(entity)
    }

    /// Checks whether a segment id belongs to an internal segment.
    ///
    /// # Returns
    /// - `Ok(true)` - A segment with that id exists and is internal
    /// - `Ok(false)` - No segment with that id, or it is declarative
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn is_internal(&self, id: Uuid) -> Result<bool, AppError> {
        let segment = entity::prelude::Segment::find()
            .filter(entity::segment::Column::Id.eq(id.to_string()))
            .filter(
                entity::segment::Column::ResourceType
                    .eq(SegmentResourceType::Internal.as_str()),
            )
            .one(self.db)
            .await?;

        Ok(segment.is_some())
    }

    /// Gets every non-internal segment of a workspace, oldest first.
    ///
    /// Conversion is all-or-nothing: a single segment with an invalid stored definition
    /// fails the whole call.
    ///
    /// # Returns
    /// - `Ok(Vec<Segment>)` - All declarative segments
    /// - `Err(AppError::InternalErr(_))` - A stored segment failed to convert
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Segment>, AppError> {
        entity::prelude::Segment::find()
            .filter(entity::segment::Column::WorkspaceId.eq(workspace_id.to_string()))
            .filter(
                entity::segment::Column::ResourceType
                    .ne(SegmentResourceType::Internal.as_str()),
            )
            .order_by_asc(entity::segment::Column::CreatedAt)
            .order_by_asc(entity::segment::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Segment::from_entity)
            .collect()
    }

    /// Deletes a declarative segment.
    ///
    /// # Returns
    /// - `Ok(true)` - Segment deleted
    /// - `Ok(false)` - No declarative segment with that id in the workspace
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = entity::prelude::Segment::delete_many()
            .filter(entity::segment::Column::Id.eq(id.to_string()))
            .filter(entity::segment::Column::WorkspaceId.eq(workspace_id.to_string()))
            .filter(
                entity::segment::Column::ResourceType
                    .eq(SegmentResourceType::Declarative.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
