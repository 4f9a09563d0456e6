//! Segment definition fixtures.

use serde_json::{json, Value};

/// Segment definition matching users whose trait at `path` equals `value`.
pub fn trait_definition(path: &str, value: &str) -> Value {
    json!({
        "entryNode": {
            "type": "Trait",
            "id": "1",
            "path": path,
            "operator": { "type": "Equals", "value": value }
        },
        "nodes": []
    })
}

/// Definition of the internal segment shadowing a subscription group.
pub fn subscription_group_definition(subscription_group_id: &str) -> Value {
    json!({
        "entryNode": {
            "type": "SubscriptionGroup",
            "id": "1",
            "subscriptionGroupId": subscription_group_id
        },
        "nodes": []
    })
}

/// A definition that does not deserialize into a segment definition.
pub fn invalid_definition() -> Value {
    json!({ "entryNode": { "type": "NotANodeType", "id": "1" } })
}
