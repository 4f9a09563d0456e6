//! User property domain models and parameters.

use uuid::Uuid;

use crate::{
    model::user_property::{UpsertUserPropertyDto, UserPropertyDefinition, UserPropertyDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_uuid,
    },
};

/// Name of the user property the CSV upload resolves email addresses through.
pub const EMAIL_PROPERTY_NAME: &str = "email";

/// Named value computed per user, such as `email` or `firstName`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProperty {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub definition: UserPropertyDefinition,
}

impl UserProperty {
    /// Converts an entity model to a user property domain model.
    ///
    /// # Returns
    /// - `Ok(UserProperty)` - The decoded property
    /// - `Err(AppError::InternalErr(_))` - Stored id or definition is invalid
    pub fn from_entity(entity: entity::user_property::Model) -> Result<Self, AppError> {
        let definition = serde_json::from_value(entity.definition).map_err(|e| {
            InternalError::InvalidDefinition {
                resource: "user property",
                id: entity.id.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: parse_uuid(&entity.id)?,
            workspace_id: parse_uuid(&entity.workspace_id)?,
            name: entity.name,
            definition,
        })
    }

    pub fn into_dto(self) -> UserPropertyDto {
        UserPropertyDto {
            id: self.id,
            workspace_id: self.workspace_id,
            name: self.name,
            definition: self.definition,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertUserPropertyParam {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub definition: UserPropertyDefinition,
}

impl UpsertUserPropertyParam {
    pub fn from_dto(dto: UpsertUserPropertyDto) -> Self {
        Self {
            id: dto.id,
            workspace_id: dto.workspace_id,
            name: dto.name,
            definition: dto.definition,
        }
    }
}
