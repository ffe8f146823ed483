//! media-imports - rewrite media imports in compiled MDX into URL constants.

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use media_imports::{RewriteConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = load_config(&cli, &cwd)?;

    match &cli.command {
        Commands::Rewrite { args } => cli::rewrite::run_rewrite(args, &config),
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
    }
}

/// Config file, then CLI overrides, then validation.
fn load_config(cli: &Cli, cwd: &Path) -> Result<RewriteConfig> {
    let mut config = RewriteConfig::load(cli.config.as_deref(), cwd)?;

    let options = cli.command.options();
    config.apply_overrides(options.mount_prefix.as_ref(), options.base_url.as_ref());
    config.finalize(cwd)?;
    Ok(config)
}
