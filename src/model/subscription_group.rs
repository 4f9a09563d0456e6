use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SubscriptionGroupType {
    OptIn,
    OptOut,
}

impl SubscriptionGroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OptIn => "OptIn",
            Self::OptOut => "OptOut",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OptIn" => Some(Self::OptIn),
            "OptOut" => Some(Self::OptOut),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSubscriptionGroupDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: SubscriptionGroupType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionGroupDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: SubscriptionGroupType,
}

/// Multipart form accepted by the CSV upload endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadCsvForm {
    /// Raw CSV text. The first record is the header row.
    pub csv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueErrorDto {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RowErrorsDto {
    pub row: usize,
    pub errors: Vec<ValueErrorDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadCsvErrorDto {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<RowErrorsDto>>,
}
