//! Segment factory for creating test segment entities.

use crate::{
    factory::helpers::{new_uuid, next_id},
    fixture,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test segments with customizable fields.
///
/// Defaults to a `Declarative` segment with a trait definition from
/// `fixture::segment::trait_definition`.
///
/// # Example
///
/// ```rust,ignore
/// let internal = SegmentFactory::new(&db, &workspace.id)
///     .resource_type("Internal")
///     .build()
///     .await?;
/// ```
pub struct SegmentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::segment::Model,
}

impl<'a> SegmentFactory<'a> {
    /// Creates a new SegmentFactory with default values for the given workspace.
    pub fn new(db: &'a DatabaseConnection, workspace_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            entity: entity::segment::Model {
                id: new_uuid(),
                workspace_id: workspace_id.into(),
                name: format!("Segment {}", next_id()),
                definition: fixture::segment::trait_definition("plan", "premium"),
                resource_type: "Declarative".to_string(),
                subscription_group_id: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Sets the segment name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the raw JSON definition.
    pub fn definition(mut self, definition: Value) -> Self {
        self.entity.definition = definition;
        self
    }

    /// Sets the resource type (`Declarative` or `Internal`).
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.entity.resource_type = resource_type.into();
        self
    }

    /// Builds and inserts the segment entity into the database.
    pub async fn build(self) -> Result<entity::segment::Model, DbErr> {
        entity::segment::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            workspace_id: ActiveValue::Set(self.entity.workspace_id),
            name: ActiveValue::Set(self.entity.name),
            definition: ActiveValue::Set(self.entity.definition),
            resource_type: ActiveValue::Set(self.entity.resource_type),
            subscription_group_id: ActiveValue::Set(self.entity.subscription_group_id),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a declarative segment with default values.
pub async fn create_segment(
    db: &DatabaseConnection,
    workspace_id: &str,
) -> Result<entity::segment::Model, DbErr> {
    SegmentFactory::new(db, workspace_id).build().await
}
