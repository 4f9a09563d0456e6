use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UserPropertyDefinition {
    Trait { path: String },
    Id,
    AnonymousId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserPropertyDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[schema(value_type = Object)]
    pub definition: UserPropertyDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPropertyDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[schema(value_type = Object)]
    pub definition: UserPropertyDefinition,
}
