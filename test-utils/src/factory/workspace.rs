//! Workspace factory for creating test workspace entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test workspaces with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let workspace = WorkspaceFactory::new(&db).name("Default").build().await?;
/// ```
pub struct WorkspaceFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
}

impl<'a> WorkspaceFactory<'a> {
    /// Creates a new WorkspaceFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Workspace {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: new_uuid(),
            name: format!("Workspace {}", next_id()),
        }
    }

    /// Sets the workspace id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the workspace name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the workspace entity into the database.
    pub async fn build(self) -> Result<entity::workspace::Model, DbErr> {
        entity::workspace::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a workspace with default values.
///
/// Shorthand for `WorkspaceFactory::new(db).build().await`.
pub async fn create_workspace(db: &DatabaseConnection) -> Result<entity::workspace::Model, DbErr> {
    WorkspaceFactory::new(db).build().await
}
