//! Journey data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    model::journey::JourneyStatus,
    server::{
        error::AppError,
        model::journey::{Journey, UpsertJourneyParam},
    },
};

/// Repository providing database operations for journeys.
pub struct JourneyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyRepository<'a> {
    /// Creates a new JourneyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `JourneyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a journey by id.
    ///
    /// New journeys start as `NotStarted` unless a status is given. On conflict the
    /// status column is only updated when `param.status` is `Some`, so omitting it
    /// preserves the current status.
    ///
    /// # Arguments
    /// - `param` - Journey fields with an already validated definition
    ///
    /// # Returns
    /// - `Ok(Journey)` - The stored journey
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertJourneyParam) -> Result<Journey, AppError> {
        let now = Utc::now();
        let definition = serde_json::to_value(&param.definition)?;

        let mut update_columns = vec![
            entity::journey::Column::Name,
            entity::journey::Column::Definition,
            entity::journey::Column::UpdatedAt,
        ];

        if param.status.is_some() {
            update_columns.push(entity::journey::Column::Status);
        }

        let status = param.status.unwrap_or(JourneyStatus::NotStarted);

        let entity = entity::prelude::Journey::insert(entity::journey::ActiveModel {
            id: ActiveValue::Set(param.id.to_string()),
            workspace_id: ActiveValue::Set(param.workspace_id.to_string()),
            name: ActiveValue::Set(param.name),
            status: ActiveValue::Set(status.as_str().to_string()),
            definition: ActiveValue::Set(definition),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::journey::Column::Id)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Journey::from_entity(entity)
    }

    /// Finds a journey by id within a workspace.
    ///
    /// # Returns
    /// - `Ok(Some(Journey))` - Journey found and converted
    /// - `Ok(None)` - No journey with that id in the workspace
    /// - `Err(AppError::InternalErr(_))` - Stored journey failed to convert
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, workspace_id: Uuid, id: Uuid) -> Result<Option<Journey>, AppError> {
        entity::prelude::Journey::find_by_id(id.to_string())
            .filter(entity::journey::Column::WorkspaceId.eq(workspace_id.to_string()))
            .one(self.db)
            .await?
            .map(Journey::from_entity)
            .transpose()
    }

    /// Deletes a journey.
    ///
    /// # Returns
    /// - `Ok(true)` - Journey deleted
    /// - `Ok(false)` - No journey with that id in the workspace
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = entity::prelude::Journey::delete_many()
            .filter(entity::journey::Column::Id.eq(id.to_string()))
            .filter(entity::journey::Column::WorkspaceId.eq(workspace_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
