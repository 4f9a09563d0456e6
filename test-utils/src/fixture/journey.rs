//! Journey definition fixtures.

use serde_json::{json, Value};

/// Linear journey: entry -> message -> delay -> exit.
///
/// # Arguments
/// - `segment_id` - Segment that enters users into the journey
/// - `template_id` - Email template sent by the message node
pub fn definition(segment_id: &str, template_id: &str) -> Value {
    json!({
        "entryNode": { "type": "EntryNode", "segment": segment_id, "child": "message-1" },
        "exitNode": { "type": "ExitNode" },
        "nodes": [
            {
                "type": "MessageNode",
                "id": "message-1",
                "name": "Welcome",
                "variant": { "type": "Email", "templateId": template_id },
                "child": "delay-1"
            },
            {
                "type": "DelayNode",
                "id": "delay-1",
                "variant": { "type": "Second", "seconds": 3600 },
                "child": "ExitNode"
            }
        ]
    })
}

/// Journey whose entry node references a node that does not exist.
pub fn invalid_definition() -> Value {
    json!({
        "entryNode": { "type": "EntryNode", "segment": "segment", "child": "missing" },
        "exitNode": { "type": "ExitNode" },
        "nodes": []
    })
}

/// Journey with two body nodes sharing the id `delay-1`.
pub fn duplicate_node_definition() -> Value {
    json!({
        "entryNode": { "type": "EntryNode", "segment": "segment", "child": "delay-1" },
        "exitNode": { "type": "ExitNode" },
        "nodes": [
            {
                "type": "DelayNode",
                "id": "delay-1",
                "variant": { "type": "Second", "seconds": 60 },
                "child": "ExitNode"
            },
            {
                "type": "DelayNode",
                "id": "delay-1",
                "variant": { "type": "Second", "seconds": 120 },
                "child": "ExitNode"
            }
        ]
    })
}

/// Journey with a body node claiming the exit node's id.
pub fn reserved_node_definition() -> Value {
    json!({
        "entryNode": { "type": "EntryNode", "segment": "segment", "child": "ExitNode" },
        "exitNode": { "type": "ExitNode" },
        "nodes": [
            {
                "type": "DelayNode",
                "id": "ExitNode",
                "variant": { "type": "Second", "seconds": 60 },
                "child": "ExitNode"
            }
        ]
    })
}
