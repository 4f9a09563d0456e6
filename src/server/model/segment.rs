//! Segment domain models and parameters.
//!
//! Segment definitions are stored as JSON. Conversion from the entity decodes the
//! definition and checks that every child reference resolves, failing with
//! `InternalError::InvalidDefinition` otherwise.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::segment::{SegmentDefinition, SegmentDto, SegmentResourceType, UpsertSegmentDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_uuid,
    },
};

/// Rule set selecting a subset of a workspace's users.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub definition: SegmentDefinition,
    pub resource_type: SegmentResourceType,
    /// Set only for the internal segment shadowing a subscription group.
    pub subscription_group_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl Segment {
    /// Converts an entity model to a segment domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The segment entity from the database
    ///
    /// # Returns
    /// - `Ok(Segment)` - The decoded segment
    /// - `Err(AppError::InternalErr(InvalidDefinition))` - Definition does not decode or
    ///   references a node that does not exist
    /// - `Err(AppError::InternalErr(_))` - Stored id or resource type could not be parsed
    pub fn from_entity(entity: entity::segment::Model) -> Result<Self, AppError> {
        let definition = decode_definition(&entity.id, entity.definition)?;

        let resource_type = SegmentResourceType::parse(&entity.resource_type).ok_or_else(|| {
            InternalError::UnknownVariant {
                field: "segment.resource_type",
                value: entity.resource_type.clone(),
            }
        })?;

        let subscription_group_id = entity
            .subscription_group_id
            .as_deref()
            .map(parse_uuid)
            .transpose()?;

        Ok(Self {
            id: parse_uuid(&entity.id)?,
            workspace_id: parse_uuid(&entity.workspace_id)?,
            name: entity.name,
            definition,
            resource_type,
            subscription_group_id,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> SegmentDto {
        SegmentDto {
            id: self.id,
            workspace_id: self.workspace_id,
            name: self.name,
            definition: self.definition,
            subscription_group_id: self.subscription_group_id,
            updated_at: self.updated_at.timestamp_millis(),
        }
    }
}

fn decode_definition(
    id: &str,
    definition: serde_json::Value,
) -> Result<SegmentDefinition, InternalError> {
    let invalid = |reason: String| InternalError::InvalidDefinition {
        resource: "segment",
        id: id.to_string(),
        reason,
    };

    let definition: SegmentDefinition =
        serde_json::from_value(definition).map_err(|e| invalid(e.to_string()))?;

    if let Some(child) = definition.dangling_child() {
        return Err(invalid(format!("unknown child node '{}'", child)));
    }

    Ok(definition)
}

/// Parameters for upserting a declarative segment.
#[derive(Debug, Clone)]
pub struct UpsertSegmentParam {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub definition: SegmentDefinition,
}

impl UpsertSegmentParam {
    pub fn from_dto(dto: UpsertSegmentDto) -> Self {
        Self {
            id: dto.id,
            workspace_id: dto.workspace_id,
            name: dto.name,
            definition: dto.definition,
        }
    }
}
