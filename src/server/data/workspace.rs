//! Workspace data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::{error::AppError, model::workspace::Workspace};

/// Repository providing database operations for workspaces.
pub struct WorkspaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkspaceRepository<'a> {
    /// Creates a new WorkspaceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WorkspaceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a workspace with a fresh id.
    ///
    /// # Arguments
    /// - `name` - Unique workspace name
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The created workspace
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the name is taken
    pub async fn create(&self, name: &str) -> Result<Workspace, AppError> {
        let entity = entity::workspace::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Workspace::from_entity(entity)
    }

    /// Finds a workspace by id.
    ///
    /// # Returns
    /// - `Ok(Some(Workspace))` - Workspace exists
    /// - `Ok(None)` - No workspace with that id
    /// - `Err(AppError)` - Database error or stored row failed to convert
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Workspace>, AppError> {
        entity::prelude::Workspace::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Workspace::from_entity)
            .transpose()
    }

    /// Finds a workspace by its unique name.
    ///
    /// # Returns
    /// - `Ok(Some(Workspace))` - Workspace exists
    /// - `Ok(None)` - No workspace with that name
    /// - `Err(AppError)` - Database error or stored row failed to convert
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Workspace>, AppError> {
        entity::prelude::Workspace::find()
            .filter(entity::workspace::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(Workspace::from_entity)
            .transpose()
    }
}
