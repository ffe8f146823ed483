//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Rewrite media imports in compiled MDX into URL constants
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: media-imports.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Log every rewrite and skip
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite media imports in ESTree JSON documents
    #[command(visible_alias = "r")]
    Rewrite {
        #[command(flatten)]
        args: RewriteArgs,
    },

    /// Print the URL each specifier resolves to
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Resolution options shared by all subcommands, overriding the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResolveOptions {
    /// URL segment assets are served under (e.g., blog-images)
    #[arg(short, long, visible_alias = "pathname")]
    pub mount_prefix: Option<String>,

    /// File URL or path of the compiled document, for `file:///` specifiers
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub base_url: Option<String>,
}

/// Rewrite command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// ESTree JSON files. Omit or use `-` to read stdin.
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, conflicts_with = "write", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Rewrite input files in place (required for several inputs)
    #[arg(short, long)]
    pub write: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    #[command(flatten)]
    pub options: ResolveOptions,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Import specifiers, e.g. `./image.png`
    #[arg(required = true, value_name = "SPECIFIER")]
    pub specifiers: Vec<String>,

    #[command(flatten)]
    pub options: ResolveOptions,
}

impl Commands {
    /// Resolution overrides given to the running subcommand.
    pub const fn options(&self) -> &ResolveOptions {
        match self {
            Self::Rewrite { args } => &args.options,
            Self::Resolve { args } => &args.options,
        }
    }
}
