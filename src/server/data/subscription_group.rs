//! Subscription group data repository.
//!
//! A subscription group is never written without its internal shadow segment. Both
//! writes happen inside a single transaction so a failure leaves neither behind.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    model::segment::{SegmentDefinition, SegmentResourceType},
    server::{
        error::AppError,
        model::subscription_group::{SubscriptionGroup, UpsertSubscriptionGroupParam},
    },
};

/// Repository providing database operations for subscription groups.
pub struct SubscriptionGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionGroupRepository<'a> {
    /// Creates a new SubscriptionGroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SubscriptionGroupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a subscription group together with its internal segment.
    ///
    /// Inside one transaction:
    /// 1. Inserts the group, or updates only `name` and `group_type` when the id exists.
    /// 2. Inserts the internal segment `subscriptionGroup-{id}` if the workspace has no
    ///    segment by that name. An existing segment is left untouched.
    ///
    /// # Arguments
    /// - `param` - Group id, workspace, name and type
    ///
    /// # Returns
    /// - `Ok(SubscriptionGroup)` - The stored group
    /// - `Err(AppError::DbErr)` - Either write failed; the transaction is rolled back
    pub async fn upsert(
        &self,
        param: UpsertSubscriptionGroupParam,
    ) -> Result<SubscriptionGroup, AppError> {
        let segment_name = param.segment_name();
        let group_id = param.id.to_string();
        let workspace_id = param.workspace_id.to_string();
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let group = entity::prelude::SubscriptionGroup::insert(
            entity::subscription_group::ActiveModel {
                id: ActiveValue::Set(group_id.clone()),
                workspace_id: ActiveValue::Set(workspace_id.clone()),
                name: ActiveValue::Set(param.name),
                group_type: ActiveValue::Set(param.group_type.as_str().to_string()),
                created_at: ActiveValue::Set(now),
            },
        )
        .on_conflict(
            OnConflict::column(entity::subscription_group::Column::Id)
                .update_columns([
                    entity::subscription_group::Column::Name,
                    entity::subscription_group::Column::GroupType,
                ])
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;

        let existing_segment = entity::prelude::Segment::find()
            .filter(entity::segment::Column::WorkspaceId.eq(&workspace_id))
            .filter(entity::segment::Column::Name.eq(&segment_name))
            .one(&txn)
            .await?;

        if existing_segment.is_none() {
            let definition = serde_json::to_value(SegmentDefinition::subscription_group(&group_id))?;

            entity::segment::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4().to_string()),
                workspace_id: ActiveValue::Set(workspace_id),
                name: ActiveValue::Set(segment_name),
                definition: ActiveValue::Set(definition),
                resource_type: ActiveValue::Set(SegmentResourceType::Internal.as_str().to_string()),
                subscription_group_id: ActiveValue::Set(Some(group_id)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        SubscriptionGroup::from_entity(group)
    }
}
