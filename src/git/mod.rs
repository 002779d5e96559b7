//! Git operations abstraction layer
//!
//! Release-note extraction only reads history, so the [Repository] trait is
//! limited to three queries: listing tags, listing merge commits in a range
//! and reading a commit body. The concrete implementations are:
//!
//! - [repository::Git2Repository]: libgit2 through the `git2` crate
//! - [system::SystemGit]: the `git` executable found on `PATH`
//! - [mock::MockRepository]: in-memory history for tests
//!
//! ```rust
//! # use release_notes::git::Repository;
//! # use release_notes::domain::CommitRange;
//! # fn example<R: Repository>(repo: &R) -> release_notes::Result<()> {
//! let tags = repo.list_tags("api-v*")?;
//! let range = CommitRange::from_last_tag(tags.first().cloned(), 100);
//! for id in repo.merge_commits(&range, "Merge pull request")? {
//!     println!("{}: {}", id, repo.commit_body(&id)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;
pub mod system;

pub use mock::MockRepository;
pub use repository::Git2Repository;
pub use system::SystemGit;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::CommitRange;
use crate::error::Result;

/// Read-only git queries needed by the extractor
pub trait Repository {
    /// List tags matching a glob, highest version first
    ///
    /// # Arguments
    /// * `pattern` - fnmatch-style glob (e.g., "api-v*-rc*")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching tag names, sorted like `--sort=-v:refname`
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>>;

    /// List full ids of commits in `range` whose subject starts with `subject_prefix`
    ///
    /// Commits are returned in git's native log order (newest first).
    /// A range whose endpoints cannot be resolved is an error.
    fn merge_commits(&self, range: &CommitRange, subject_prefix: &str) -> Result<Vec<String>>;

    /// Message body of a commit: everything after the subject and the blank line
    ///
    /// Returns an empty string for commits without a body.
    fn commit_body(&self, commit_id: &str) -> Result<String>;
}

/// Which implementation of [Repository] to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// libgit2, no external executable needed
    #[default]
    Git2,
    /// The `git` command line tool
    Cli,
}

/// Open the repository containing `path` with the selected backend
pub fn open(backend: Backend, path: &Path) -> Result<Box<dyn Repository>> {
    tracing::debug!(?backend, path = %path.display(), "opening repository");
    match backend {
        Backend::Git2 => Ok(Box::new(Git2Repository::open(path)?)),
        Backend::Cli => Ok(Box::new(SystemGit::open(path)?)),
    }
}
