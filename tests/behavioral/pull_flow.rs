// ABOUTME: Behavioral tests for pull: take the sync branch into another clone
// The pulled changes end up staged on top of the sync commit's parent.

use anyhow::Result;
use pretty_assertions::assert_eq;

use gsync::Outcome;

use super::fixtures::{git, workflow, BareRemote, TestRepo};
use crate::require_git;

/// A "laptop" repo that has pushed notes.txt, and a "desktop" clone wired to the same remote
fn pushed_setup() -> Result<(TestRepo, TestRepo, BareRemote)> {
    let remote = BareRemote::new()?;
    let laptop = TestRepo::new()?;
    laptop.add_remote("gsync", remote.path())?;

    let desktop = TestRepo::clone_of(&laptop)?;
    desktop.add_remote("gsync", remote.path())?;

    laptop.write("notes.txt", "from the laptop\n")?;
    let outcome = workflow(laptop.path(), "push\n").run()?;
    assert_eq!(outcome, Outcome::Pushed { failed: vec![] });

    Ok((laptop, desktop, remote))
}

/// Clean tree: no stash prompt, changes arrive staged
#[test]
fn test_clean_pull_stages_remote_changes() -> Result<()> {
    require_git!();
    let (_laptop, desktop, _remote) = pushed_setup()?;

    // Only one answer is scripted: a stash prompt would read "" and abort the pull
    let mut wf = workflow(desktop.path(), "pull\n");
    let outcome = wf.run()?;

    assert_eq!(
        outcome,
        Outcome::Pulled {
            stashed: false,
            failed: vec![]
        }
    );
    assert_eq!(desktop.read("notes.txt")?, "from the laptop\n");
    assert_eq!(desktop.head_subject()?, "Initial commit");
    assert_eq!(desktop.staged_files()?, vec!["notes.txt"]);

    Ok(())
}

/// Dirty tree + "y": local work is stashed (and not reapplied), then the pull proceeds
#[test]
fn test_dirty_pull_stashes_on_yes() -> Result<()> {
    require_git!();
    let (_laptop, desktop, _remote) = pushed_setup()?;
    desktop.write("scratch.txt", "local only\n")?;

    let mut wf = workflow(desktop.path(), "pull\ny\n");
    let outcome = wf.run()?;

    assert_eq!(
        outcome,
        Outcome::Pulled {
            stashed: true,
            failed: vec![]
        }
    );
    assert_eq!(desktop.stash_count()?, 1);
    assert!(!desktop.path().join("scratch.txt").exists());
    assert_eq!(desktop.read("notes.txt")?, "from the laptop\n");

    Ok(())
}

/// Dirty tree + anything but "y": nothing is fetched or reset
#[test]
fn test_dirty_pull_declined_changes_nothing() -> Result<()> {
    require_git!();
    let (_laptop, desktop, _remote) = pushed_setup()?;
    desktop.write("scratch.txt", "local only\n")?;

    let mut wf = workflow(desktop.path(), "pull\nn\n");
    let outcome = wf.run()?;

    assert_eq!(outcome, Outcome::StashDeclined);
    assert_eq!(desktop.read("scratch.txt")?, "local only\n");
    assert!(!desktop.path().join("notes.txt").exists());
    assert_eq!(desktop.stash_count()?, 0);
    assert!(
        git(desktop.path(), &["rev-parse", "--verify", "refs/remotes/gsync/gsync"]).is_err(),
        "Nothing should have been fetched"
    );

    Ok(())
}

/// Pulling before anything was pushed: the resets fail, the working tree survives
#[test]
fn test_pull_without_remote_branch_reports_failures() -> Result<()> {
    require_git!();
    let remote = BareRemote::new()?;
    let repo = TestRepo::new()?;
    repo.add_remote("gsync", remote.path())?;

    let mut wf = workflow(repo.path(), "pull\n");
    let outcome = wf.run()?;

    assert_eq!(
        outcome,
        Outcome::Pulled {
            stashed: false,
            failed: vec![
                "git reset --hard gsync/gsync".to_string(),
                "git reset --soft HEAD^".to_string(),
            ]
        }
    );
    assert_eq!(repo.read("README.md")?, "# Test Repo\n");
    assert_eq!(repo.head_subject()?, "Initial commit");

    Ok(())
}

/// Pushing from one clone and pulling in another round-trips deletions too
#[test]
fn test_pull_mirrors_deleted_files() -> Result<()> {
    require_git!();
    let remote = BareRemote::new()?;
    let laptop = TestRepo::new()?;
    laptop.add_commit("old.txt", "obsolete\n", "Add old file")?;
    laptop.add_remote("gsync", remote.path())?;
    let desktop = TestRepo::clone_of(&laptop)?;
    desktop.add_remote("gsync", remote.path())?;

    std::fs::remove_file(laptop.path().join("old.txt"))?;
    workflow(laptop.path(), "push\n").run()?;

    let outcome = workflow(desktop.path(), "pull\n").run()?;

    assert!(matches!(outcome, Outcome::Pulled { ref failed, .. } if failed.is_empty()));
    assert!(!desktop.path().join("old.txt").exists());
    assert_eq!(desktop.head_subject()?, "Add old file");

    Ok(())
}
