use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fixed id of the entry node in the editor graph.
pub const ENTRY_NODE_ID: &str = "EntryNode";
/// Fixed id of the exit node in the editor graph.
pub const EXIT_NODE_ID: &str = "ExitNode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum JourneyStatus {
    NotStarted,
    Running,
    Paused,
}

impl JourneyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::Running => "Running",
            Self::Paused => "Paused",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NotStarted" => Some(Self::NotStarted),
            "Running" => Some(Self::Running),
            "Paused" => Some(Self::Paused),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "EntryNode")]
pub struct EntryNode {
    pub segment: String,
    pub child: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "ExitNode")]
pub struct ExitNode {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DelayVariant {
    Second { seconds: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum MessageVariant {
    Email { template_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SegmentSplitVariant {
    Boolean {
        segment: String,
        true_child: String,
        false_child: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum JourneyBodyNode {
    DelayNode {
        id: String,
        variant: DelayVariant,
        child: String,
    },
    MessageNode {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        variant: MessageVariant,
        child: String,
    },
    SegmentSplitNode {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        variant: SegmentSplitVariant,
    },
}

impl JourneyBodyNode {
    pub fn id(&self) -> &str {
        match self {
            Self::DelayNode { id, .. }
            | Self::MessageNode { id, .. }
            | Self::SegmentSplitNode { id, .. } => id,
        }
    }

    /// Outgoing references, paired with the branch label for split nodes.
    pub fn children(&self) -> Vec<(&str, Option<&'static str>)> {
        match self {
            Self::DelayNode { child, .. } | Self::MessageNode { child, .. } => {
                vec![(child.as_str(), None)]
            }
            Self::SegmentSplitNode {
                variant:
                    SegmentSplitVariant::Boolean {
                        true_child,
                        false_child,
                        ..
                    },
                ..
            } => vec![
                (true_child.as_str(), Some("true")),
                (false_child.as_str(), Some("false")),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDefinition {
    pub entry_node: EntryNode,
    pub exit_node: ExitNode,
    #[serde(default)]
    pub nodes: Vec<JourneyBodyNode>,
}

impl JourneyDefinition {
    pub fn find_node(&self, id: &str) -> Option<&JourneyBodyNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Returns the first child reference that names neither a body node nor the exit node.
    pub fn dangling_child(&self) -> Option<&str> {
        std::iter::once(self.entry_node.child.as_str())
            .chain(
                self.nodes
                    .iter()
                    .flat_map(|node| node.children().into_iter().map(|(child, _)| child)),
            )
            .find(|child| *child != EXIT_NODE_ID && self.find_node(child).is_none())
    }

    /// Returns the first body node id that is reserved for the entry or exit node, or
    /// that an earlier body node already uses.
    pub fn conflicting_node_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .map(JourneyBodyNode::id)
            .find(|id| *id == ENTRY_NODE_ID || *id == EXIT_NODE_ID || !seen.insert(*id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertJourneyDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: Option<JourneyStatus>,
    #[schema(value_type = Object)]
    pub definition: JourneyDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub status: JourneyStatus,
    #[schema(value_type = Object)]
    pub definition: JourneyDefinition,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}
