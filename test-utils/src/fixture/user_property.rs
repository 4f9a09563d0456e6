//! User property definition fixtures.

use serde_json::{json, Value};

/// Definition reading the trait at `path` from identify events.
pub fn trait_definition(path: &str) -> Value {
    json!({ "type": "Trait", "path": path })
}
