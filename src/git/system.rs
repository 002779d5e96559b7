//! System git backend
//!
//! Runs the `git` executable for each query. Tag ordering comes from git
//! itself (`--sort=-v:refname`), so `versionsort.suffix` settings in the
//! user's git config are honoured here but not by the libgit2 backend.

use crate::domain::CommitRange;
use crate::error::{ReleaseNotesError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using the system `git` command
pub struct SystemGit {
    /// Working tree root
    work_tree: PathBuf,
}

impl SystemGit {
    /// Open the repository containing `path`
    pub fn open(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            return Err(ReleaseNotesError::command(
                "git rev-parse --show-toplevel",
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(SystemGit {
            work_tree: PathBuf::from(stdout.trim()),
        })
    }

    fn git_cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.work_tree);
        cmd
    }

    /// Run git with `args` and return stdout; a non-zero exit is an error
    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(?args, "running git");
        let output = self.git_cmd().args(args).output()?;

        if !output.status.success() {
            return Err(ReleaseNotesError::command(
                format!("git {}", args.join(" ")),
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl super::Repository for SystemGit {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let stdout = self.run(&["tag", "--list", pattern, "--sort=-v:refname"])?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn merge_commits(&self, range: &CommitRange, subject_prefix: &str) -> Result<Vec<String>> {
        let revspec = range.revspec();
        let stdout = self.run(&["log", "--format=%H%x09%s", &revspec, "--"])?;

        Ok(stdout
            .lines()
            .filter_map(|line| line.split_once('\t'))
            .filter(|(_, subject)| subject.starts_with(subject_prefix))
            .map(|(hash, _)| hash.to_string())
            .collect())
    }

    fn commit_body(&self, commit_id: &str) -> Result<String> {
        let stdout = self.run(&["log", "-n", "1", "--format=%b", commit_id, "--"])?;

        Ok(stdout.trim_end().to_string())
    }
}
