//! Shared helpers for CLI commands.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use media_imports::Diagnostics;
use media_imports::log;
use serde_json::Value;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Map CLI paths to inputs. No paths, or `-`, means stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Self::Stdin];
        }
        paths
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Serialize a tree, optionally pretty-printed.
pub fn to_json(tree: &Value, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

/// Print advisory diagnostics as warnings, tagged with their source.
pub fn print_diagnostics(source: &dyn fmt::Display, diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        log!("warning"; "{}: {}", source, diagnostic);
    }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "import")` -> `"1 import"`
/// - `plural_count(3, "import")` -> `"3 imports"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
