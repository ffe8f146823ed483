//! Depth-first walk over statement collections.

use serde_json::Value;

/// Visit every statement held in a `body` array, anywhere in the tree.
///
/// Statements are offered to `replace` in document order. Returning
/// `Some(node)` swaps the statement in place (same index, same collection
/// length) and the walk does not descend into the replacement; returning
/// `None` leaves it untouched and the walk continues inside it.
pub fn visit_statements<F>(node: &mut Value, replace: &mut F)
where
    F: FnMut(&Value) -> Option<Value>,
{
    match node {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if key == "body"
                    && let Value::Array(statements) = child
                {
                    for statement in statements.iter_mut() {
                        match replace(statement) {
                            Some(replacement) => *statement = replacement,
                            None => visit_statements(statement, replace),
                        }
                    }
                } else {
                    visit_statements(child, replace);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                visit_statements(item, replace);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn marker(name: &str) -> Value {
        json!({ "type": "Marker", "name": name })
    }

    #[test]
    fn test_visits_in_document_order() {
        let mut tree = json!({
            "type": "Program",
            "body": [
                marker("a"),
                {
                    "type": "FunctionDeclaration",
                    "body": { "type": "BlockStatement", "body": [marker("b"), marker("c")] }
                },
                marker("d")
            ]
        });

        let mut seen = Vec::new();
        visit_statements(&mut tree, &mut |node: &Value| {
            if let Some(name) = node.get("name").and_then(Value::as_str) {
                seen.push(name.to_string());
            }
            None
        });

        assert_eq!(seen, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_replacement_keeps_position_and_length() {
        let mut tree = json!({
            "type": "Program",
            "body": [marker("a"), marker("b"), marker("c")]
        });

        visit_statements(&mut tree, &mut |node: &Value| {
            (node["name"] == "b").then(|| json!({ "type": "Replaced" }))
        });

        assert_eq!(
            tree["body"],
            json!([marker("a"), { "type": "Replaced" }, marker("c")])
        );
    }

    #[test]
    fn test_replacement_is_not_revisited() {
        // The replacement carries a body that would match again if descended into
        let mut tree = json!({ "type": "Program", "body": [marker("a")] });

        let mut calls = 0;
        visit_statements(&mut tree, &mut |node: &Value| {
            calls += 1;
            (node["name"] == "a").then(|| json!({ "type": "Wrapper", "body": [marker("a")] }))
        });

        assert_eq!(calls, 1);
        assert_eq!(tree["body"][0]["body"][0], marker("a"));
    }

    #[test]
    fn test_non_array_body_is_descended() {
        let mut tree = json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "ArrowFunctionExpression",
                    "body": { "type": "BlockStatement", "body": [marker("inner")] }
                }
            }]
        });

        let mut seen = Vec::new();
        visit_statements(&mut tree, &mut |node: &Value| {
            if node["type"] == "Marker" {
                seen.push(node["name"].clone());
            }
            None
        });

        assert_eq!(seen, [json!("inner")]);
    }
}
