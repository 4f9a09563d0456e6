use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EmailProviderType {
    SendGrid,
}

impl EmailProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendGrid => "SendGrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SendGrid" => Some(Self::SendGrid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEmailProviderDto {
    pub workspace_id: Uuid,
    #[serde(rename = "type")]
    pub provider_type: EmailProviderType,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailProviderDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    #[serde(rename = "type")]
    pub provider_type: EmailProviderType,
}
