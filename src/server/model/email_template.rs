//! Email template domain models and parameters.

use uuid::Uuid;

use crate::{
    model::content::{MessageTemplateDto, TemplateResourceType, UpsertEmailTemplateDto},
    server::{error::AppError, util::parse::parse_uuid},
};

#[derive(Debug, Clone, PartialEq)]
pub struct EmailTemplate {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl EmailTemplate {
    pub fn from_entity(entity: entity::email_template::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            workspace_id: parse_uuid(&entity.workspace_id)?,
            name: entity.name,
            from: entity.from_address,
            subject: entity.subject,
            body: entity.body,
        })
    }

    /// Converts the template to its message template resource.
    ///
    /// Email is the only template type, so every template is tagged `Email`.
    pub fn into_dto(self) -> MessageTemplateDto {
        MessageTemplateDto {
            template_type: TemplateResourceType::Email,
            workspace_id: self.workspace_id,
            id: self.id,
            name: self.name,
            from: self.from,
            subject: self.subject,
            body: self.body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertEmailTemplateParam {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl UpsertEmailTemplateParam {
    pub fn from_dto(dto: UpsertEmailTemplateDto) -> Self {
        Self {
            id: dto.id,
            workspace_id: dto.workspace_id,
            name: dto.name,
            from: dto.from,
            subject: dto.subject,
            body: dto.body,
        }
    }
}
