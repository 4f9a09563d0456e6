//! User property factory.

use crate::{
    factory::helpers::{new_uuid, next_id},
    fixture,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test user properties.
pub struct UserPropertyFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user_property::Model,
}

impl<'a> UserPropertyFactory<'a> {
    /// Creates a new factory for a trait-backed property in the given workspace.
    pub fn new(db: &'a DatabaseConnection, workspace_id: impl Into<String>) -> Self {
        let name = format!("property{}", next_id());
        Self {
            db,
            entity: entity::user_property::Model {
                id: new_uuid(),
                workspace_id: workspace_id.into(),
                definition: fixture::user_property::trait_definition(&name),
                name,
            },
        }
    }

    /// Sets the property name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the raw JSON definition.
    pub fn definition(mut self, definition: Value) -> Self {
        self.entity.definition = definition;
        self
    }

    /// Builds and inserts the user property.
    pub async fn build(self) -> Result<entity::user_property::Model, DbErr> {
        entity::user_property::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            workspace_id: ActiveValue::Set(self.entity.workspace_id),
            name: ActiveValue::Set(self.entity.name),
            definition: ActiveValue::Set(self.entity.definition),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user property with default values.
pub async fn create_user_property(
    db: &DatabaseConnection,
    workspace_id: &str,
) -> Result<entity::user_property::Model, DbErr> {
    UserPropertyFactory::new(db, workspace_id).build().await
}
