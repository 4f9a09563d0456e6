//! Email provider settings domain models.

use uuid::Uuid;

use crate::{
    model::settings::{EmailProviderDto, EmailProviderType, UpsertEmailProviderDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_uuid,
    },
};

/// Delivery provider configured for a workspace.
///
/// The API key is write-only and never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailProvider {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub provider_type: EmailProviderType,
}

impl EmailProvider {
    pub fn from_entity(entity: entity::email_provider::Model) -> Result<Self, AppError> {
        let provider_type = EmailProviderType::parse(&entity.provider_type).ok_or_else(|| {
            InternalError::UnknownVariant {
                field: "email_provider.provider_type",
                value: entity.provider_type.clone(),
            }
        })?;

        Ok(Self {
            id: parse_uuid(&entity.id)?,
            workspace_id: parse_uuid(&entity.workspace_id)?,
            provider_type,
        })
    }

    pub fn into_dto(self) -> EmailProviderDto {
        EmailProviderDto {
            id: self.id,
            workspace_id: self.workspace_id,
            provider_type: self.provider_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertEmailProviderParam {
    pub workspace_id: Uuid,
    pub provider_type: EmailProviderType,
    pub api_key: Option<String>,
}

impl UpsertEmailProviderParam {
    pub fn from_dto(dto: UpsertEmailProviderDto) -> Self {
        Self {
            workspace_id: dto.workspace_id,
            provider_type: dto.provider_type,
            api_key: dto.api_key,
        }
    }
}
