//! Advisory diagnostics raised while resolving specifiers.
//!
//! Nothing here aborts a rewrite. Diagnostics are collected and handed back
//! to the caller, which decides whether to print or drop them.

use thiserror::Error;

/// A single non-fatal resolution problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A file URL needed relative-path conversion but no base was configured.
    #[error("provide the `base_url` option to resolve `{specifier}` against the compiled document")]
    MissingBaseUrl { specifier: String },

    /// A file URL (specifier or base) could not be parsed.
    #[error("`{url}` is not a valid file URL, leaving `{specifier}` unresolved")]
    InvalidFileUrl { url: String, specifier: String },
}

/// Ordered collection of diagnostics for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_display() {
        let diagnostic = Diagnostic::MissingBaseUrl {
            specifier: "file:///a/image.png".into(),
        };
        let display = diagnostic.to_string();
        assert!(display.contains("base_url"));
        assert!(display.contains("file:///a/image.png"));
    }

    #[test]
    fn test_collect_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.push(Diagnostic::MissingBaseUrl {
            specifier: "first".into(),
        });
        diagnostics.push(Diagnostic::InvalidFileUrl {
            url: "file://".into(),
            specifier: "second".into(),
        });

        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics.as_slice()[0],
            Diagnostic::MissingBaseUrl { .. }
        ));
        assert!(matches!(
            diagnostics.as_slice()[1],
            Diagnostic::InvalidFileUrl { .. }
        ));
    }
}
