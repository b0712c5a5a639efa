// ABOUTME: Git integration for the sync workflow: subprocess execution and named operations

pub mod error;
pub mod executor;
pub mod sync_repo;

pub use error::GitError;
pub use executor::{CliGit, GitExecutor};
pub use sync_repo::{StepError, SyncRepo};
