//! Command-line interface module.

mod args;
mod common;
pub mod resolve;
pub mod rewrite;

pub use args::{Cli, Commands};
