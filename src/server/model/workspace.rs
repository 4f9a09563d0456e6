//! Workspace domain model.

use uuid::Uuid;

use crate::{
    model::workspace::WorkspaceDto,
    server::{error::AppError, util::parse::parse_uuid},
};

/// Tenant that owns every other resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
}

impl Workspace {
    /// Converts an entity model to a workspace domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The converted workspace
    /// - `Err(AppError::InternalErr(ParseUuid))` - Stored id is not a UUID
    pub fn from_entity(entity: entity::workspace::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            name: entity.name,
        })
    }

    pub fn into_dto(self) -> WorkspaceDto {
        WorkspaceDto {
            id: self.id,
            name: self.name,
        }
    }
}
