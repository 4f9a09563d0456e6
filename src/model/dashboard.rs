use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{
    content::MessageTemplateDto, journey::JourneyDto, segment::SegmentDto,
    workspace::WorkspaceDto,
};

/// Settled request state as the dashboard store expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CompletionStatus<T> {
    Successful(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NodeTypeProps {
    EntryNode {
        segment_id: Option<String>,
    },
    ExitNode,
    DelayNode {
        seconds: Option<u64>,
    },
    MessageNode {
        name: String,
        template_id: Option<String>,
    },
    SegmentSplitNode {
        name: String,
        segment_id: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "JourneyNode", rename_all = "camelCase")]
pub struct JourneyNodeData {
    pub node_type_props: NodeTypeProps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyUiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: JourneyNodeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyUiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

/// Journey editor slice of the dashboard store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEditorState {
    pub journey_name: String,
    pub journey_nodes: Vec<JourneyUiNode>,
    pub journey_edges: Vec<JourneyUiEdge>,
    pub journey_nodes_index: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreloadedState {
    pub workspace: CompletionStatus<WorkspaceDto>,
    pub messages: CompletionStatus<Vec<MessageTemplateDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journeys: Option<CompletionStatus<Vec<JourneyDto>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<CompletionStatus<Vec<SegmentDto>>>,
    #[serde(flatten)]
    pub editor: JourneyEditorState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePropsDto {
    pub server_initial_state: PreloadedState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundDto {
    pub not_found: bool,
}
