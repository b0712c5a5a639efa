// ABOUTME: Runs git as a subprocess in a fixed working directory
//
// Three invocation styles are needed by the sync workflow:
// - quiet: only the exit status matters, output is discarded
// - inherited: git talks straight to our stdout/stderr
// - captured: stdout is collected and returned

use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use super::error::GitError;

/// Executes git commands. Implemented by [`CliGit`] and by recording fakes in tests.
pub trait GitExecutor {
    /// Run with all output discarded; succeed only on a zero exit
    fn run_quiet(&self, args: &[&str]) -> Result<(), GitError>;

    /// Run with stdout/stderr passed through to the terminal
    fn run_inherited(&self, args: &[&str]) -> Result<(), GitError>;

    /// Run and return captured stdout
    fn run_captured(&self, args: &[&str]) -> Result<String, GitError>;
}

/// The real git binary found on `PATH`
#[derive(Debug, Clone)]
pub struct CliGit {
    working_dir: PathBuf,
}

impl CliGit {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!(args = ?args, dir = %self.working_dir.display(), "Running git command");

        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.working_dir);
        cmd
    }
}

impl GitExecutor for CliGit {
    fn run_quiet(&self, args: &[&str]) -> Result<(), GitError> {
        let status = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            debug!(args = ?args, %status, "Quiet git command returned non-zero");
            return Err(GitError::Exit(status));
        }

        Ok(())
    }

    fn run_inherited(&self, args: &[&str]) -> Result<(), GitError> {
        let status = self.command(args).status()?;

        if !status.success() {
            warn!(args = ?args, %status, "Git command failed");
            return Err(GitError::Exit(status));
        }

        Ok(())
    }

    fn run_captured(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.command(args).stdin(Stdio::null()).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(args = ?args, stderr = %stderr, "Git command failed");
            return Err(GitError::Exit(output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
