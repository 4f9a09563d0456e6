//! Journey factory for creating test journey entities.

use crate::{
    factory::helpers::{new_uuid, next_id},
    fixture,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test journeys with customizable fields.
///
/// Defaults to a `NotStarted` journey with the linear definition from
/// `fixture::journey::definition`.
pub struct JourneyFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::journey::Model,
}

impl<'a> JourneyFactory<'a> {
    /// Creates a new JourneyFactory with default values for the given workspace.
    pub fn new(db: &'a DatabaseConnection, workspace_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            entity: entity::journey::Model {
                id: new_uuid(),
                workspace_id: workspace_id.into(),
                name: format!("Journey {}", next_id()),
                status: "NotStarted".to_string(),
                definition: fixture::journey::definition(&new_uuid(), &new_uuid()),
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Sets the journey id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    /// Sets the journey name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the journey status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Sets the raw JSON definition.
    pub fn definition(mut self, definition: Value) -> Self {
        self.entity.definition = definition;
        self
    }

    /// Builds and inserts the journey entity into the database.
    pub async fn build(self) -> Result<entity::journey::Model, DbErr> {
        entity::journey::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            workspace_id: ActiveValue::Set(self.entity.workspace_id),
            name: ActiveValue::Set(self.entity.name),
            status: ActiveValue::Set(self.entity.status),
            definition: ActiveValue::Set(self.entity.definition),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a journey with default values.
pub async fn create_journey(
    db: &DatabaseConnection,
    workspace_id: &str,
) -> Result<entity::journey::Model, DbErr> {
    JourneyFactory::new(db, workspace_id).build().await
}
