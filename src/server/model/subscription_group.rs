//! Subscription group domain models and parameters.
//!
//! A subscription group is always persisted together with an internal "shadow" segment
//! whose membership mirrors the group. The segment name is derived from the group id.

use uuid::Uuid;

use crate::{
    model::subscription_group::{
        SubscriptionGroupDto, SubscriptionGroupType, UpsertSubscriptionGroupDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_uuid,
    },
};

/// Opt-in or opt-out mailing list scoped to a workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionGroup {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub group_type: SubscriptionGroupType,
}

impl SubscriptionGroup {
    /// Converts an entity model to a subscription group domain model.
    ///
    /// # Returns
    /// - `Ok(SubscriptionGroup)` - The converted group
    /// - `Err(AppError::InternalErr(_))` - Stored id or type could not be parsed
    pub fn from_entity(entity: entity::subscription_group::Model) -> Result<Self, AppError> {
        let group_type = SubscriptionGroupType::parse(&entity.group_type).ok_or_else(|| {
            InternalError::UnknownVariant {
                field: "subscription_group.group_type",
                value: entity.group_type.clone(),
            }
        })?;

        Ok(Self {
            id: parse_uuid(&entity.id)?,
            workspace_id: parse_uuid(&entity.workspace_id)?,
            name: entity.name,
            group_type,
        })
    }

    pub fn into_dto(self) -> SubscriptionGroupDto {
        SubscriptionGroupDto {
            id: self.id,
            workspace_id: self.workspace_id,
            name: self.name,
            group_type: self.group_type,
        }
    }
}

/// Parameters for upserting a subscription group and its shadow segment.
#[derive(Debug, Clone)]
pub struct UpsertSubscriptionGroupParam {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub group_type: SubscriptionGroupType,
}

impl UpsertSubscriptionGroupParam {
    pub fn from_dto(dto: UpsertSubscriptionGroupDto) -> Self {
        Self {
            id: dto.id,
            workspace_id: dto.workspace_id,
            name: dto.name,
            group_type: dto.group_type,
        }
    }

    /// Name of the internal segment paired with this group.
    pub fn segment_name(&self) -> String {
        shadow_segment_name(&self.id)
    }
}

/// Returns the name of the internal segment paired with a subscription group.
pub fn shadow_segment_name(subscription_group_id: &Uuid) -> String {
    format!("subscriptionGroup-{}", subscription_group_id)
}
