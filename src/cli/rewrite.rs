//! Rewrite command implementation.
//!
//! Reads ESTree JSON documents, rewrites their media imports and writes them
//! back out. Several documents are rewritten in parallel, each with its own
//! tree; only the configured transform is shared.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use media_imports::{MediaImports, RewriteConfig, RewriteReport, debug, log};
use rayon::prelude::*;
use serde_json::Value;

use super::args::RewriteArgs;
use super::common::{Input, plural_count, print_diagnostics, to_json};

/// Execute rewrite command
pub fn run_rewrite(args: &RewriteArgs, config: &RewriteConfig) -> Result<()> {
    let inputs = Input::from_args(&args.inputs);
    if inputs.len() > 1 && !args.write {
        bail!("rewriting several inputs requires --write");
    }
    if args.write && inputs.contains(&Input::Stdin) {
        bail!("--write cannot rewrite stdin in place");
    }

    let transform = MediaImports::new(config.clone());
    match inputs.as_slice() {
        [input] if !args.write => rewrite_to_output(input, args, &transform),
        _ => rewrite_in_place(&inputs, args.pretty, &transform),
    }
}

/// Parse and rewrite one document, returning the serialized result.
fn rewrite_document(
    input: &Input,
    transform: &MediaImports,
    pretty: bool,
) -> Result<(String, RewriteReport)> {
    let source = input.read()?;
    let mut tree: Value = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse {input} as ESTree JSON"))?;

    let report = transform.rewrite(&mut tree);
    print_diagnostics(input, &report.diagnostics);

    let json = to_json(&tree, pretty).with_context(|| format!("failed to serialize {input}"))?;
    Ok((json, report))
}

/// Single document to `--output` or stdout.
fn rewrite_to_output(input: &Input, args: &RewriteArgs, transform: &MediaImports) -> Result<()> {
    let (json, report) = rewrite_document(input, transform, args.pretty)?;

    if let Some(ref output_path) = args.output {
        write_file(output_path, &json)?;
        let count = plural_count(report.rewrites.len(), "import");
        log!("rewrite"; "{} -> {}", count, output_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}").context("failed to write stdout")?;
        debug!("rewrite"; "{} in {}", plural_count(report.rewrites.len(), "import"), input);
    }
    Ok(())
}

/// Every document written back to its own file.
fn rewrite_in_place(inputs: &[Input], pretty: bool, transform: &MediaImports) -> Result<()> {
    let results: Vec<Result<usize>> = inputs
        .par_iter()
        .map(|input| {
            let (json, report) = rewrite_document(input, transform, pretty)?;
            if report.is_unchanged() {
                debug!("rewrite"; "{}: unchanged", input);
                return Ok(0);
            }
            if let Some(path) = input.path() {
                write_file(path, &json)?;
            }
            Ok(report.rewrites.len())
        })
        .collect();

    let mut rewritten = 0;
    let mut failed = 0;
    for result in results {
        match result {
            Ok(count) => rewritten += count,
            Err(e) => {
                log!("error"; "{:#}", e);
                failed += 1;
            }
        }
    }

    log!(
        "rewrite";
        "{} in {}",
        plural_count(rewritten, "import"),
        plural_count(inputs.len() - failed, "document")
    );

    if failed > 0 {
        bail!("{} could not be rewritten", plural_count(failed, "document"));
    }
    Ok(())
}

fn write_file(path: &Path, json: &str) -> Result<()> {
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}
