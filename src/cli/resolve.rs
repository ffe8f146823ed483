//! Resolve command implementation.
//!
//! Prints the URL each specifier would be rewritten to, one per line.
//! Specifiers the rewriter skips are printed as given.

use std::io::{self, Write};

use anyhow::{Context, Result};
use media_imports::rewrite::filter::{MediaKind, qualify};
use media_imports::{Diagnostics, RewriteConfig, debug, log, resolve_path};
use serde_json::Value;

use super::args::ResolveArgs;
use super::common::print_diagnostics;

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, config: &RewriteConfig) -> Result<()> {
    let mut diagnostics = Diagnostics::new();
    let lines = resolve_all(&args.specifiers, config, &mut diagnostics);

    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}").context("failed to write stdout")?;
    }

    print_diagnostics(&"resolve", &diagnostics);
    Ok(())
}

/// Resolve every specifier the rewriter would touch. Anything else is
/// echoed unchanged, the same way the rewriter leaves it in the tree.
fn resolve_all(
    specifiers: &[String],
    config: &RewriteConfig,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    specifiers
        .iter()
        .map(|specifier| {
            let value = Value::String(specifier.clone());
            match qualify(&value) {
                Ok(specifier) => {
                    let kind = MediaKind::from_path(specifier).map_or("media", MediaKind::name);
                    let url = resolve_path(
                        specifier,
                        config.mount_prefix.as_deref(),
                        config.base_url.as_deref(),
                        diagnostics,
                    );
                    debug!("resolve"; "`{}` ({}) -> {}", specifier, kind, url);
                    url.to_string()
                }
                Err(skip) => {
                    log!("warning"; "`{}` left unchanged: {}", specifier, skip);
                    specifier.clone()
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_in_order() {
        let config = RewriteConfig {
            mount_prefix: Some("blog-images".into()),
            base_url: None,
        };
        let specifiers = ["./a.png".to_string(), "../../b.mp3".to_string()];
        let mut diagnostics = Diagnostics::new();

        let urls = resolve_all(&specifiers, &config, &mut diagnostics);
        assert_eq!(urls, ["/blog-images/a.png", "/b.mp3"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_qualifying_specifiers_echoed() {
        let config = RewriteConfig {
            mount_prefix: Some("blog".into()),
            base_url: None,
        };
        let specifiers = [
            "https://cdn.example.com/a.png".to_string(),
            "/image.png".to_string(),
            "./Component.jsx".to_string(),
            "./kept.png".to_string(),
        ];
        let mut diagnostics = Diagnostics::new();

        let lines = resolve_all(&specifiers, &config, &mut diagnostics);
        assert_eq!(
            lines,
            [
                "https://cdn.example.com/a.png",
                "/image.png",
                "./Component.jsx",
                "/blog/kept.png"
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_file_url_without_base_reports_diagnostic() {
        let specifiers = ["file:///srv/site/a.png".to_string()];
        let mut diagnostics = Diagnostics::new();

        let urls = resolve_all(&specifiers, &RewriteConfig::default(), &mut diagnostics);
        assert_eq!(urls, ["/srv/site/a.png"]);
        assert_eq!(diagnostics.len(), 1);
    }
}
