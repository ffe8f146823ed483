//! Media import rewriting.
//!
//! Replaces media imports in a compiled MDX tree with URL constants:
//!
//! ```text
//! import imgUrl from "./image.png";
//!     → const imgUrl = "/image.png";
//! const {default: imgUrl} = await import(_resolve("./image.png"));
//!     → const imgUrl = "/image.png";
//! ```
//!
//! Two independent scans run in sequence: destructured dynamic imports
//! first, then static import declarations. Each qualifying statement is
//! swapped for a `const` declaration at the same index; everything else in
//! the tree is left exactly as the host produced it.

pub mod filter;


use serde_json::Value;

use crate::ast::{
    Expression, ImportDeclaration, Pattern, PatternProperty, Statement, VariableDeclaration,
    const_declaration, visit_statements,
};
use crate::config::RewriteConfig;
use crate::debug;
use crate::resolve::{Diagnostics, ResolvedUrl, resolve_path};

use filter::qualify;

/// Which binding shape a scan looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// `const {default: name} = await import(resolve("specifier"))`
    DynamicImport,
    /// `import name from "specifier"`
    StaticImport,
}

impl Scan {
    /// Scans in the order they run.
    pub const ALL: [Self; 2] = [Self::DynamicImport, Self::StaticImport];

    pub const fn name(self) -> &'static str {
        match self {
            Self::DynamicImport => "dynamic import",
            Self::StaticImport => "import",
        }
    }
}

/// A single applied rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub scan: Scan,
    pub name: String,
    pub specifier: String,
    pub url: ResolvedUrl,
}

/// What a rewrite pass did, alongside the mutated tree.
#[derive(Debug, Clone, Default)]
pub struct RewriteReport {
    pub rewrites: Vec<Rewrite>,
    pub diagnostics: Diagnostics,
}

impl RewriteReport {
    pub fn is_unchanged(&self) -> bool {
        self.rewrites.is_empty()
    }
}

/// Name and raw specifier extracted from a binding site.
struct Binding {
    name: String,
    specifier: Value,
}

/// The rewrite transform, configured once per invocation.
#[derive(Debug, Clone, Default)]
pub struct MediaImports {
    config: RewriteConfig,
}

impl MediaImports {
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    /// Rewrite qualifying media imports in `tree` in place.
    pub fn rewrite(&self, tree: &mut Value) -> RewriteReport {
        let mut report = RewriteReport::default();
        for scan in Scan::ALL {
            visit_statements(tree, &mut |node: &Value| {
                self.rewrite_statement(scan, node, &mut report)
            });
        }
        report
    }

    /// Build the replacement for `node` if it is a qualifying binding site.
    fn rewrite_statement(
        &self,
        scan: Scan,
        node: &Value,
        report: &mut RewriteReport,
    ) -> Option<Value> {
        let binding = match (scan, Statement::classify(node)) {
            (Scan::DynamicImport, Statement::VariableDeclaration(decl)) => dynamic_binding(decl)?,
            (Scan::StaticImport, Statement::ImportDeclaration(decl)) => static_binding(decl)?,
            _ => return None,
        };
        if binding.name.is_empty() {
            return None;
        }

        let specifier = match qualify(&binding.specifier) {
            Ok(specifier) => specifier,
            Err(skip) => {
                debug!("rewrite"; "skipped {} `{}`: {}", scan.name(), binding.name, skip);
                return None;
            }
        };

        let url = resolve_path(
            specifier,
            self.config.mount_prefix.as_deref(),
            self.config.base_url.as_deref(),
            &mut report.diagnostics,
        );
        debug!("rewrite"; "{} `{}`: {} -> {}", scan.name(), binding.name, specifier, url);

        let replacement = const_declaration(&binding.name, url.as_str(), node);
        report.rewrites.push(Rewrite {
            scan,
            name: binding.name,
            specifier: specifier.to_string(),
            url,
        });
        Some(replacement)
    }
}

/// `const {<key>: name} = await import(<call>("specifier"))`
///
/// Requires a single declarator whose pattern has a single property bound
/// to a plain identifier.
fn dynamic_binding(decl: VariableDeclaration) -> Option<Binding> {
    let [declarator] = <[_; 1]>::try_from(decl.declarations).ok()?;

    let Pattern::ObjectPattern(pattern) = declarator.id else {
        return None;
    };
    let [PatternProperty::Property {
        value: Pattern::Identifier(ident),
    }] = <[_; 1]>::try_from(pattern.properties).ok()?
    else {
        return None;
    };

    let Some(Expression::AwaitExpression { argument }) = declarator.init else {
        return None;
    };
    let Expression::ImportExpression { source } = *argument else {
        return None;
    };
    let Expression::CallExpression { arguments } = *source else {
        return None;
    };
    let Some(Expression::Literal(literal)) = arguments.into_iter().next() else {
        return None;
    };

    Some(Binding {
        name: ident.name,
        specifier: literal.value,
    })
}

/// `import name from "specifier"`: the first specifier's local name.
fn static_binding(decl: ImportDeclaration) -> Option<Binding> {
    let first = decl.specifiers.into_iter().next()?;
    Some(Binding {
        name: first.local.name,
        specifier: decl.source.value,
    })
}
