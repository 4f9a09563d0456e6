use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SegmentOperator {
    Equals { value: String },
    Exists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SegmentNode {
    Trait {
        id: String,
        path: String,
        operator: SegmentOperator,
    },
    And {
        id: String,
        children: Vec<String>,
    },
    Or {
        id: String,
        children: Vec<String>,
    },
    Performed {
        id: String,
        event: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        times: Option<u32>,
    },
    SubscriptionGroup {
        id: String,
        subscription_group_id: String,
    },
}

impl SegmentNode {
    pub fn id(&self) -> &str {
        match self {
            Self::Trait { id, .. }
            | Self::And { id, .. }
            | Self::Or { id, .. }
            | Self::Performed { id, .. }
            | Self::SubscriptionGroup { id, .. } => id,
        }
    }

    pub fn children(&self) -> &[String] {
        match self {
            Self::And { children, .. } | Self::Or { children, .. } => children,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDefinition {
    pub entry_node: SegmentNode,
    #[serde(default)]
    pub nodes: Vec<SegmentNode>,
}

impl SegmentDefinition {
    /// Definition of the internal segment whose membership mirrors a subscription group.
    pub fn subscription_group(subscription_group_id: &str) -> Self {
        Self {
            entry_node: SegmentNode::SubscriptionGroup {
                id: "1".to_string(),
                subscription_group_id: subscription_group_id.to_string(),
            },
            nodes: Vec::new(),
        }
    }

    /// Returns the first child reference that does not name a node in this definition.
    pub fn dangling_child(&self) -> Option<&str> {
        let ids: Vec<&str> = std::iter::once(&self.entry_node)
            .chain(self.nodes.iter())
            .map(SegmentNode::id)
            .collect();

        std::iter::once(&self.entry_node)
            .chain(self.nodes.iter())
            .flat_map(|node| node.children().iter())
            .map(String::as_str)
            .find(|child| !ids.contains(child))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SegmentResourceType {
    Declarative,
    Internal,
}

impl SegmentResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declarative => "Declarative",
            Self::Internal => "Internal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Declarative" => Some(Self::Declarative),
            "Internal" => Some(Self::Internal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSegmentDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[schema(value_type = Object)]
    pub definition: SegmentDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[schema(value_type = Object)]
    pub definition: SegmentDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_group_id: Option<Uuid>,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}
