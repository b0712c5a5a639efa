// ABOUTME: Library crate for gsync exposing the sync workflow for the binary and tests

#![allow(missing_docs)]

pub mod cli;
pub mod config;
pub mod git;
pub mod prompt;
pub mod workflow;

pub use config::SyncConfig;
pub use git::{CliGit, GitError, GitExecutor, StepError, SyncRepo};
pub use prompt::{Prompter, StdioPrompter};
pub use workflow::{Action, Outcome, Workflow};
