//! Journey editor state derived from a journey definition.
//!
//! The editor renders a journey as a graph of UI nodes and edges. Nodes are laid out top
//! to bottom by their breadth-first depth from the entry node, with the exit node always
//! on the last level.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::model::{
    dashboard::{
        EdgeData, JourneyEditorState, JourneyNodeData, JourneyUiEdge, JourneyUiNode,
        NodeTypeProps, Position,
    },
    journey::{
        DelayVariant, JourneyBodyNode, JourneyDefinition, MessageVariant, SegmentSplitVariant,
        ENTRY_NODE_ID, EXIT_NODE_ID,
    },
};

const UI_NODE_TYPE: &str = "journey";
const UI_EDGE_TYPE: &str = "workflow";

const CENTER_X: f64 = 400.0;
const TOP_Y: f64 = 100.0;
const LEVEL_HEIGHT: f64 = 200.0;
const SIBLING_WIDTH: f64 = 300.0;

/// Builds the editor state for a stored journey.
///
/// # Arguments
/// - `name` - Journey name shown in the editor
/// - `definition` - Validated journey definition
///
/// # Returns
/// - `JourneyEditorState` - Laid out nodes, edges and the id to position index
pub fn journey_to_state(name: &str, definition: &JourneyDefinition) -> JourneyEditorState {
    let depths = body_depths(definition);
    let unreachable_depth = depths.values().copied().max().unwrap_or(0) + 1;
    let exit_depth = if definition.nodes.len() > depths.len() {
        unreachable_depth + 1
    } else {
        unreachable_depth
    };

    // Level members in visit order; entry sits alone on level 0.
    let mut levels: BTreeMap<usize, Vec<(String, NodeTypeProps)>> = BTreeMap::new();
    levels.entry(0).or_default().push((
        ENTRY_NODE_ID.to_string(),
        NodeTypeProps::EntryNode {
            segment_id: Some(definition.entry_node.segment.clone()),
        },
    ));

    for node in ordered_body_nodes(definition, &depths) {
        let depth = depths.get(node.id()).copied().unwrap_or(unreachable_depth);
        levels
            .entry(depth)
            .or_default()
            .push((node.id().to_string(), node_type_props(node)));
    }

    levels
        .entry(exit_depth)
        .or_default()
        .push((EXIT_NODE_ID.to_string(), NodeTypeProps::ExitNode));

    let nodes: Vec<JourneyUiNode> = levels
        .into_iter()
        .flat_map(|(depth, members)| {
            let count = members.len();
            members
                .into_iter()
                .enumerate()
                .map(move |(index, (id, props))| ui_node(id, position(depth, index, count), props))
        })
        .collect();

    let mut edges = vec![ui_edge(ENTRY_NODE_ID, &definition.entry_node.child, None)];
    for node in &definition.nodes {
        for (child, label) in node.children() {
            edges.push(ui_edge(node.id(), child, label));
        }
    }

    JourneyEditorState {
        journey_name: name.to_string(),
        journey_nodes_index: build_nodes_index(&nodes),
        journey_nodes: nodes,
        journey_edges: edges,
    }
}

/// Editor state for a journey that does not exist yet: entry connected to exit.
pub fn default_state(journey_id: &str) -> JourneyEditorState {
    let nodes = vec![
        ui_node(
            ENTRY_NODE_ID.to_string(),
            position(0, 0, 1),
            NodeTypeProps::EntryNode { segment_id: None },
        ),
        ui_node(
            EXIT_NODE_ID.to_string(),
            position(1, 0, 1),
            NodeTypeProps::ExitNode,
        ),
    ];

    JourneyEditorState {
        journey_name: format!("New Journey - {}", journey_id),
        journey_nodes_index: build_nodes_index(&nodes),
        journey_nodes: nodes,
        journey_edges: vec![ui_edge(ENTRY_NODE_ID, EXIT_NODE_ID, None)],
    }
}

/// Maps each node id to its position in `nodes`.
pub fn build_nodes_index(nodes: &[JourneyUiNode]) -> BTreeMap<String, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.clone(), index))
        .collect()
}

/// Breadth-first depth of every body node reachable from the entry node.
fn body_depths(definition: &JourneyDefinition) -> HashMap<&str, usize> {
    let mut depths = HashMap::new();
    let mut queue = VecDeque::from([(definition.entry_node.child.as_str(), 1)]);

    while let Some((id, depth)) = queue.pop_front() {
        if depths.contains_key(id) {
            continue;
        }
        let Some(node) = definition.find_node(id) else {
            continue;
        };

        depths.insert(node.id(), depth);
        for (child, _) in node.children() {
            queue.push_back((child, depth + 1));
        }
    }

    depths
}

/// Body nodes in breadth-first order, followed by unreachable nodes in definition order.
fn ordered_body_nodes<'a>(
    definition: &'a JourneyDefinition,
    depths: &HashMap<&str, usize>,
) -> Vec<&'a JourneyBodyNode> {
    let mut reachable: Vec<&JourneyBodyNode> = definition
        .nodes
        .iter()
        .filter(|node| depths.contains_key(node.id()))
        .collect();
    reachable.sort_by_key(|node| depths[node.id()]);

    let reachable_ids: HashSet<&str> = reachable.iter().map(|node| node.id()).collect();
    let unreachable = definition
        .nodes
        .iter()
        .filter(|node| !reachable_ids.contains(node.id()));

    reachable.into_iter().chain(unreachable).collect()
}

fn node_type_props(node: &JourneyBodyNode) -> NodeTypeProps {
    match node {
        JourneyBodyNode::DelayNode {
            variant: DelayVariant::Second { seconds },
            ..
        } => NodeTypeProps::DelayNode {
            seconds: Some(*seconds),
        },
        JourneyBodyNode::MessageNode {
            name,
            variant: MessageVariant::Email { template_id },
            ..
        } => NodeTypeProps::MessageNode {
            name: name.clone().unwrap_or_default(),
            template_id: Some(template_id.clone()),
        },
        JourneyBodyNode::SegmentSplitNode {
            name,
            variant: SegmentSplitVariant::Boolean { segment, .. },
            ..
        } => NodeTypeProps::SegmentSplitNode {
            name: name.clone().unwrap_or_default(),
            segment_id: Some(segment.clone()),
        },
    }
}

fn position(depth: usize, index: usize, count: usize) -> Position {
    let offset = index as f64 - (count as f64 - 1.0) / 2.0;

    Position {
        x: CENTER_X + offset * SIBLING_WIDTH,
        y: TOP_Y + depth as f64 * LEVEL_HEIGHT,
    }
}

fn ui_node(id: String, position: Position, node_type_props: NodeTypeProps) -> JourneyUiNode {
    JourneyUiNode {
        id,
        node_type: UI_NODE_TYPE.to_string(),
        position,
        data: JourneyNodeData { node_type_props },
    }
}

fn ui_edge(source: &str, target: &str, label: Option<&str>) -> JourneyUiEdge {
    JourneyUiEdge {
        id: format!("{}=>{}", source, target),
        source: source.to_string(),
        target: target.to_string(),
        edge_type: UI_EDGE_TYPE.to_string(),
        data: label.map(|label| EdgeData {
            label: label.to_string(),
        }),
    }
}
