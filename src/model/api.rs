use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of the `DELETE` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResourceDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
