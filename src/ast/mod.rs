//! Typed views over the host compiler's ESTree JSON.
//!
//! The tree itself stays a `serde_json::Value`; only the handful of node
//! kinds the rewriter inspects are modelled, as unions keyed on the `type`
//! field. Statements dispatch on the tag by hand; nested patterns and
//! expressions are serde tagged enums. Everything else (unknown tags, or known tags missing an
//! expected child) classifies as `Other` and is left alone.
//!
//! ```text
//! Statement   ImportDeclaration | VariableDeclaration | Other
//! Pattern     Identifier | ObjectPattern | Other
//! Expression  AwaitExpression | ImportExpression | CallExpression | Literal | Other
//! ```

mod build;
mod visit;

use serde::Deserialize;
use serde_json::Value;

pub use build::const_declaration;
pub use visit::visit_statements;

/// Statement-level node.
#[derive(Debug)]
pub enum Statement {
    ImportDeclaration(ImportDeclaration),
    VariableDeclaration(VariableDeclaration),
    Other,
}

impl Statement {
    /// Classify a statement node. Malformed nodes are `Other`.
    ///
    /// Only the two inspected kinds are deserialized. Every other statement
    /// is classified by its `type` tag alone.
    pub fn classify(node: &Value) -> Self {
        let parsed = match node.get("type").and_then(Value::as_str) {
            Some("ImportDeclaration") => {
                ImportDeclaration::deserialize(node).map(Self::ImportDeclaration)
            }
            Some("VariableDeclaration") => {
                VariableDeclaration::deserialize(node).map(Self::VariableDeclaration)
            }
            _ => return Self::Other,
        };
        parsed.unwrap_or(Self::Other)
    }
}

/// `import name from "source"`
#[derive(Debug, Deserialize)]
pub struct ImportDeclaration {
    #[serde(default)]
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Literal,
}

/// Any import specifier kind (default, named, namespace): all carry `local`.
#[derive(Debug, Deserialize)]
pub struct ImportSpecifier {
    pub local: Identifier,
}

/// `const|let|var <declarations>`
#[derive(Debug, Deserialize)]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    #[serde(default)]
    pub init: Option<Expression>,
}

/// Binding pattern on the left of a declarator or inside a property.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    ObjectPattern(ObjectPattern),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct ObjectPattern {
    pub properties: Vec<PatternProperty>,
}

/// Entry of an object pattern; rest elements are `Other`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum PatternProperty {
    Property { value: Pattern },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    AwaitExpression {
        argument: Box<Expression>,
    },
    ImportExpression {
        source: Box<Expression>,
    },
    CallExpression {
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    Literal(Literal),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// Literal node. `value` is kept raw: strings, numbers, booleans, `null`,
/// and serialized regex/bigint values all deserialize.
#[derive(Debug, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_import_declaration() {
        let node = json!({
            "type": "ImportDeclaration",
            "specifiers": [{
                "type": "ImportDefaultSpecifier",
                "local": { "type": "Identifier", "name": "imgUrl" }
            }],
            "source": { "type": "Literal", "value": "./image.png", "raw": "\"./image.png\"" }
        });

        let Statement::ImportDeclaration(import) = Statement::classify(&node) else {
            panic!("expected import declaration");
        };
        assert_eq!(import.specifiers[0].local.name, "imgUrl");
        assert_eq!(import.source.value, json!("./image.png"));
    }

    #[test]
    fn test_classify_dynamic_import_declaration() {
        let node = json!({
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": {
                    "type": "ObjectPattern",
                    "properties": [{
                        "type": "Property",
                        "key": { "type": "Identifier", "name": "default" },
                        "value": { "type": "Identifier", "name": "imgUrl" },
                        "kind": "init"
                    }]
                },
                "init": {
                    "type": "AwaitExpression",
                    "argument": {
                        "type": "ImportExpression",
                        "source": {
                            "type": "CallExpression",
                            "callee": {
                                "type": "Identifier",
                                "name": "_resolveDynamicMdxSpecifier"
                            },
                            "arguments": [{ "type": "Literal", "value": "./image.png" }]
                        }
                    }
                }
            }]
        });

        let Statement::VariableDeclaration(decl) = Statement::classify(&node) else {
            panic!("expected variable declaration");
        };
        let declarator = &decl.declarations[0];
        assert!(matches!(&declarator.id, Pattern::ObjectPattern(p) if p.properties.len() == 1));
        assert!(matches!(
            declarator.init,
            Some(Expression::AwaitExpression { .. })
        ));
    }

    #[test]
    fn test_unknown_tags_are_other() {
        let node = json!({ "type": "FunctionDeclaration", "id": null, "params": [] });
        assert!(matches!(Statement::classify(&node), Statement::Other));

        let node = json!({
            "type": "VariableDeclaration",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "ArrayPattern", "elements": [] },
                "init": {
                    "type": "ArrowFunctionExpression",
                    "body": { "type": "BlockStatement", "body": [] }
                }
            }]
        });
        let Statement::VariableDeclaration(decl) = Statement::classify(&node) else {
            panic!("expected variable declaration");
        };
        assert!(matches!(decl.declarations[0].id, Pattern::Other));
        assert!(matches!(decl.declarations[0].init, Some(Expression::Other)));
    }

    #[test]
    fn test_malformed_nodes_are_other() {
        // Missing `source`
        let node = json!({ "type": "ImportDeclaration", "specifiers": [] });
        assert!(matches!(Statement::classify(&node), Statement::Other));

        // Missing `type`
        let node = json!({ "declarations": [] });
        assert!(matches!(Statement::classify(&node), Statement::Other));

        // Not an object at all
        assert!(matches!(Statement::classify(&json!(null)), Statement::Other));
        assert!(matches!(Statement::classify(&json!("text")), Statement::Other));
    }

    #[test]
    fn test_dispatch_on_tag_only() {
        // Fields of an import, but a different tag
        let node = json!({
            "type": "ExpressionStatement",
            "specifiers": [],
            "source": { "type": "Literal", "value": "./image.png" }
        });
        assert!(matches!(Statement::classify(&node), Statement::Other));

        // Non-string tag
        let node = json!({ "type": 7, "declarations": [] });
        assert!(matches!(Statement::classify(&node), Statement::Other));

        // Tag is enough; the `type` key itself is not part of the view
        let node = json!({ "type": "VariableDeclaration", "declarations": [] });
        let Statement::VariableDeclaration(decl) = Statement::classify(&node) else {
            panic!("expected variable declaration");
        };
        assert!(decl.declarations.is_empty());
    }

    #[test]
    fn test_uninitialized_declarator() {
        let node = json!({
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "x" },
                "init": null
            }]
        });
        let Statement::VariableDeclaration(decl) = Statement::classify(&node) else {
            panic!("expected variable declaration");
        };
        assert!(decl.declarations[0].init.is_none());
        assert!(matches!(&decl.declarations[0].id, Pattern::Identifier(id) if id.name == "x"));
    }
}
