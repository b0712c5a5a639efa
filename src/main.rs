// ABOUTME: Main entry point for gsync
//
// Binary: gsync
// Usage: gsync [--config PATH]
// Runs the interactive flow in the current directory: ensure the sync remote
// exists, then push or pull. Every workflow path exits 0; problems are reported
// as text on stdout.

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::error;

use gsync::cli::Cli;
use gsync::{CliGit, StdioPrompter, SyncConfig, SyncRepo, Workflow};

fn main() {
    let args = Cli::parse();

    setup_logging();
    setup_panic_handler();

    if let Err(e) = run(&args) {
        error!("gsync failed: {:#}", e);
        println!("Error: {e:#}");
    }
}

fn run(args: &Cli) -> Result<()> {
    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            println!("Failed to get current directory: {e}");
            return Ok(());
        }
    };

    if which::which("git").is_err() {
        println!("git executable not found on PATH.");
        return Ok(());
    }

    let config = SyncConfig::load(&working_dir, args.config.as_deref())?;
    let repo = SyncRepo::new(CliGit::new(&working_dir), config);

    let prompter = StdioPrompter::new(io::stdin().lock(), io::stdout());
    let mut workflow = Workflow::new(repo, prompter, io::stdout());
    workflow.run()?;

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::prelude::*;

    // Logs go to a file only; the terminal belongs to prompts and git output
    let Some(log_dir) = SyncConfig::get_user_config_dir().map(|dir| dir.join("logs")) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_file = log_dir.join(format!(
        "gsync-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gsync=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs in ~/.gsync/logs for more details.");
    }));
}
