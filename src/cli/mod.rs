// ABOUTME: CLI argument parsing for gsync
//
// gsync has no subcommands: one invocation runs the whole interactive flow
// (push or pull is chosen at the prompt).

use clap::Parser;
use std::path::PathBuf;

/// Push working changes to a personal sync remote as one squashed commit, or pull them back
#[derive(Parser, Debug)]
#[command(name = "gsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file applied on top of ~/.gsync/config.toml and .gsync/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
