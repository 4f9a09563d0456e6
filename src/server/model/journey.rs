//! Journey domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::journey::{JourneyDefinition, JourneyDto, JourneyStatus, UpsertJourneyDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_uuid,
    },
};

/// Multi-step messaging workflow entered by members of a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub status: JourneyStatus,
    pub definition: JourneyDefinition,
    pub updated_at: DateTime<Utc>,
}

impl Journey {
    /// Converts an entity model to a journey domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The journey entity from the database
    ///
    /// # Returns
    /// - `Ok(Journey)` - The decoded journey
    /// - `Err(AppError::InternalErr(InvalidDefinition))` - Definition does not decode or
    ///   a child reference names neither a body node nor the exit node
    /// - `Err(AppError::InternalErr(_))` - Stored id or status could not be parsed
    pub fn from_entity(entity: entity::journey::Model) -> Result<Self, AppError> {
        let definition: JourneyDefinition = serde_json::from_value(entity.definition)
            .map_err(|e| invalid_definition(&entity.id, e.to_string()))?;
        validate_definition(&entity.id, &definition)?;

        let status =
            JourneyStatus::parse(&entity.status).ok_or_else(|| InternalError::UnknownVariant {
                field: "journey.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: parse_uuid(&entity.id)?,
            workspace_id: parse_uuid(&entity.workspace_id)?,
            name: entity.name,
            status,
            definition,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> JourneyDto {
        JourneyDto {
            id: self.id,
            workspace_id: self.workspace_id,
            name: self.name,
            status: self.status,
            definition: self.definition,
            updated_at: self.updated_at.timestamp_millis(),
        }
    }
}

/// Checks that body node ids are unique and every child reference resolves.
///
/// # Returns
/// - `Ok(())` - Node ids are unique and all references name a body node or the exit node
/// - `Err(InternalError::InvalidDefinition)` - A node id is duplicated or reserved, or a
///   reference is dangling
pub fn validate_definition(id: &str, definition: &JourneyDefinition) -> Result<(), InternalError> {
    if let Some(node_id) = definition.conflicting_node_id() {
        return Err(invalid_definition(
            id,
            format!("duplicate or reserved node id '{}'", node_id),
        ));
    }

    match definition.dangling_child() {
        Some(child) => Err(invalid_definition(
            id,
            format!("unknown child node '{}'", child),
        )),
        None => Ok(()),
    }
}

fn invalid_definition(id: &str, reason: String) -> InternalError {
    InternalError::InvalidDefinition {
        resource: "journey",
        id: id.to_string(),
        reason,
    }
}

/// Parameters for upserting a journey.
///
/// `status` is `None` when the client omitted it; existing journeys keep their status
/// and new journeys start as `NotStarted`.
#[derive(Debug, Clone)]
pub struct UpsertJourneyParam {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub status: Option<JourneyStatus>,
    pub definition: JourneyDefinition,
}

impl UpsertJourneyParam {
    pub fn from_dto(dto: UpsertJourneyDto) -> Self {
        Self {
            id: dto.id,
            workspace_id: dto.workspace_id,
            name: dto.name,
            status: dto.status,
            definition: dto.definition,
        }
    }
}
