// ABOUTME: Named git operations used by push/pull against the sync remote
//
// Every method maps to exactly one git invocation. Sequence steps pass output
// through to the terminal; checks (repo check, remote lookup, remote add) stay quiet.

use thiserror::Error;
use tracing::debug;

use super::error::GitError;
use super::executor::GitExecutor;
use crate::config::SyncConfig;

/// A git invocation that failed, with the command line that was run
#[derive(Error, Debug)]
#[error("Failed to execute '{command}': {source}")]
pub struct StepError {
    pub command: String,
    #[source]
    pub source: GitError,
}

fn command_line(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

pub struct SyncRepo<G> {
    git: G,
    config: SyncConfig,
}

impl<G: GitExecutor> SyncRepo<G> {
    pub fn new(git: G, config: SyncConfig) -> Self {
        Self { git, config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn executor(&self) -> &G {
        &self.git
    }

    pub fn into_executor(self) -> G {
        self.git
    }

    fn step(&self, args: &[&str]) -> Result<(), StepError> {
        self.git.run_inherited(args).map_err(|source| StepError {
            command: command_line(args),
            source,
        })
    }

    pub fn is_inside_work_tree(&self) -> bool {
        self.git
            .run_quiet(&["rev-parse", "--is-inside-work-tree"])
            .is_ok()
    }

    pub fn remote_exists(&self) -> bool {
        let exists = self
            .git
            .run_quiet(&["remote", "get-url", &self.config.remote])
            .is_ok();
        debug!(remote = %self.config.remote, exists, "Checked sync remote");
        exists
    }

    pub fn add_remote(&self, url: &str) -> Result<(), GitError> {
        self.git
            .run_quiet(&["remote", "add", &self.config.remote, url])
    }

    pub fn stage_all(&self) -> Result<(), StepError> {
        self.step(&["add", "-A"])
    }

    pub fn commit(&self) -> Result<(), StepError> {
        self.step(&["commit", "-m", &self.config.commit_message])
    }

    /// Force-push HEAD to the sync branch on the sync remote
    pub fn force_push(&self) -> Result<(), StepError> {
        let refspec = format!("HEAD:{}", self.config.branch);
        self.step(&["push", &self.config.remote, &refspec, "--force"])
    }

    /// Drop the tip commit while keeping its changes staged
    pub fn soft_reset_parent(&self) -> Result<(), StepError> {
        self.step(&["reset", "--soft", "HEAD^"])
    }

    /// True when `status --porcelain` prints anything
    pub fn has_uncommitted_changes(&self) -> Result<bool, GitError> {
        let out = self.git.run_captured(&["status", "--porcelain"])?;
        Ok(!out.is_empty())
    }

    pub fn stash_all(&self) -> Result<(), StepError> {
        self.step(&["stash", "push", "--include-untracked"])
    }

    pub fn fetch(&self) -> Result<(), StepError> {
        self.step(&["fetch", &self.config.remote])
    }

    /// Point the current branch, index and working tree at `<remote>/<branch>`
    pub fn hard_reset_to_remote(&self) -> Result<(), StepError> {
        self.step(&["reset", "--hard", &self.config.tracking_ref()])
    }
}
