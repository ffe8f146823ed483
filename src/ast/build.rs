//! Replacement node construction.

use serde_json::{Map, Value, json};

/// Position fields carried over from the node being replaced.
const POSITION_KEYS: &[&str] = &["start", "end", "loc", "range"];

/// Build `const <name> = "<value>";`, positioned where `original` was.
pub fn const_declaration(name: &str, value: &str, original: &Value) -> Value {
    let raw = Value::String(value.to_string()).to_string();

    let mut node = json!({
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": name },
            "init": { "type": "Literal", "value": value, "raw": raw }
        }]
    });

    if let (Value::Object(target), Value::Object(source)) = (&mut node, original) {
        copy_positions(target, source);
    }
    node
}

fn copy_positions(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for key in POSITION_KEYS {
        if let Some(position) = source.get(*key) {
            target.insert((*key).to_string(), position.clone());
        }
    }
}
