// ABOUTME: Error type for a single git subprocess invocation

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to spawn git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("{0}")]
    Exit(ExitStatus),
}

impl GitError {
    /// Exit code of the failed command, if git ran and exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit(status) => status.code(),
            Self::Spawn(_) => None,
        }
    }
}
