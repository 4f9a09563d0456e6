use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TemplateResourceType {
    Email,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEmailTemplateDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplateDto {
    #[serde(rename = "type")]
    pub template_type: TemplateResourceType,
    pub workspace_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}
