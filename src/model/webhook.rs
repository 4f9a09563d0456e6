use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of a SendGrid event webhook batch.
///
/// `workspaceId` and `userId` are custom args attached when the message was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SendgridEventDto {
    #[serde(default)]
    pub email: Option<String>,
    pub timestamp: i64,
    pub event: String,
    pub sg_event_id: String,
    #[serde(default)]
    pub sg_message_id: Option<String>,
    #[serde(default, rename = "workspaceId")]
    pub workspace_id: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}
