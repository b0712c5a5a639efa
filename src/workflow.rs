// ABOUTME: The interactive push/pull workflow against the sync remote
//
// Flow: repository check -> ensure remote -> ask push/pull -> run the sequence.
// Hard stops end the run with an Outcome; failed git steps inside a sequence
// are reported and the sequence carries on.

use anyhow::Result;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

use crate::git::{GitExecutor, StepError, SyncRepo};
use crate::prompt::Prompter;

pub const ACTION_PROMPT: &str = "Do you want to push or pull changes? (push/pull):";
pub const STASH_PROMPT: &str = "There are uncommitted changes. Do you want to stash them? (y/n):";
pub const PULL_DONE_MESSAGE: &str =
    "performed git reset --soft to keep the pulled changes without commit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push,
    Pull,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid action: {0:?}")]
pub struct InvalidAction(pub String);

impl FromStr for Action {
    type Err = InvalidAction;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "push" => Ok(Self::Push),
            "pull" => Ok(Self::Pull),
            other => Err(InvalidAction(other.to_string())),
        }
    }
}

/// How a run ended. `failed` lists the command lines of steps that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotARepository,
    InvalidAction,
    StashDeclined,
    StatusUnavailable,
    Pushed { failed: Vec<String> },
    Pulled { stashed: bool, failed: Vec<String> },
}

pub struct Workflow<G, P, W> {
    repo: SyncRepo<G>,
    prompter: P,
    out: W,
}

impl<G: GitExecutor, P: Prompter, W: Write> Workflow<G, P, W> {
    pub fn new(repo: SyncRepo<G>, prompter: P, out: W) -> Self {
        Self {
            repo,
            prompter,
            out,
        }
    }

    pub fn repo(&self) -> &SyncRepo<G> {
        &self.repo
    }

    pub fn run(&mut self) -> Result<Outcome> {
        info!(remote = %self.repo.config().remote, "Starting gsync");

        if !self.repo.is_inside_work_tree() {
            writeln!(self.out, "Not a git repository.")?;
            return Ok(Outcome::NotARepository);
        }

        self.ensure_remote()?;

        let answer = self.prompter.ask(ACTION_PROMPT)?;
        let outcome = match answer.parse::<Action>() {
            Ok(Action::Push) => self.push()?,
            Ok(Action::Pull) => self.pull()?,
            Err(e) => {
                info!(error = %e, "Rejected action");
                writeln!(self.out, "Invalid action. Exiting.")?;
                Outcome::InvalidAction
            }
        };

        info!(outcome = ?outcome, "gsync finished");
        Ok(outcome)
    }

    /// Create the sync remote from a prompted URL when it is missing.
    /// A failed `remote add` is reported and the run continues.
    pub fn ensure_remote(&mut self) -> Result<()> {
        if self.repo.remote_exists() {
            return Ok(());
        }

        let remote = self.repo.config().remote.clone();
        writeln!(self.out, "Remote '{remote}' not found.")?;

        let url = self
            .prompter
            .ask(&format!("Enter the URL for the '{remote}' repository:"))?;

        if let Err(e) = self.repo.add_remote(&url) {
            warn!(remote = %remote, url = %url, error = %e, "Failed to add sync remote");
            writeln!(self.out, "Failed to set up remote: {e}")?;
        } else {
            info!(remote = %remote, url = %url, "Added sync remote");
        }

        Ok(())
    }

    /// Publish the working state as one commit on the remote, then drop it locally
    pub fn push(&mut self) -> Result<Outcome> {
        let mut failed = Vec::new();

        let result = self.repo.stage_all();
        self.report(result, &mut failed)?;
        let result = self.repo.commit();
        self.report(result, &mut failed)?;
        let result = self.repo.force_push();
        self.report(result, &mut failed)?;
        let result = self.repo.soft_reset_parent();
        self.report(result, &mut failed)?;

        Ok(Outcome::Pushed { failed })
    }

    /// Replace local state with the remote's squashed commit, left staged.
    /// Stashed changes are not reapplied.
    pub fn pull(&mut self) -> Result<Outcome> {
        let dirty = match self.repo.has_uncommitted_changes() {
            Ok(dirty) => dirty,
            Err(e) => {
                writeln!(self.out, "Failed to check for changes: {e}")?;
                return Ok(Outcome::StatusUnavailable);
            }
        };

        let mut failed = Vec::new();
        let mut stashed = false;

        if dirty {
            if self.prompter.ask(STASH_PROMPT)? != "y" {
                writeln!(self.out, "Exiting without pulling changes.")?;
                return Ok(Outcome::StashDeclined);
            }
            let result = self.repo.stash_all();
            stashed = result.is_ok();
            self.report(result, &mut failed)?;
        }

        let result = self.repo.fetch();
        self.report(result, &mut failed)?;
        let result = self.repo.hard_reset_to_remote();
        self.report(result, &mut failed)?;
        let result = self.repo.soft_reset_parent();
        self.report(result, &mut failed)?;

        writeln!(self.out, "{PULL_DONE_MESSAGE}")?;

        Ok(Outcome::Pulled { stashed, failed })
    }

    fn report(&mut self, result: Result<(), StepError>, failed: &mut Vec<String>) -> Result<()> {
        if let Err(e) = result {
            warn!(command = %e.command, exit_code = ?e.source.exit_code(), "Sync step failed");
            writeln!(self.out, "{e}")?;
            failed.push(e.command);
        }
        Ok(())
    }
}
