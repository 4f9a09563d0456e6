//! Subscription group factory.
//!
//! Inserts only the subscription group row. Tests exercising the paired internal
//! segment should go through `SubscriptionGroupRepository::upsert` instead.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscription groups.
pub struct SubscriptionGroupFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::subscription_group::Model,
}

impl<'a> SubscriptionGroupFactory<'a> {
    /// Creates a new factory for an `OptIn` group in the given workspace.
    pub fn new(db: &'a DatabaseConnection, workspace_id: impl Into<String>) -> Self {
        Self {
            db,
            entity: entity::subscription_group::Model {
                id: new_uuid(),
                workspace_id: workspace_id.into(),
                name: format!("Subscription Group {}", next_id()),
                group_type: "OptIn".to_string(),
                created_at: Utc::now(),
            },
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the group type (`OptIn` or `OptOut`).
    pub fn group_type(mut self, group_type: impl Into<String>) -> Self {
        self.entity.group_type = group_type.into();
        self
    }

    /// Builds and inserts the subscription group.
    pub async fn build(self) -> Result<entity::subscription_group::Model, DbErr> {
        entity::subscription_group::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            workspace_id: ActiveValue::Set(self.entity.workspace_id),
            name: ActiveValue::Set(self.entity.name),
            group_type: ActiveValue::Set(self.entity.group_type),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscription group with default values.
pub async fn create_subscription_group(
    db: &DatabaseConnection,
    workspace_id: &str,
) -> Result<entity::subscription_group::Model, DbErr> {
    SubscriptionGroupFactory::new(db, workspace_id).build().await
}
