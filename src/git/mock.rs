use crate::domain::{tag, CommitRange};
use crate::error::{ReleaseNotesError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Commit stored in a [MockRepository]
#[derive(Debug, Clone, PartialEq)]
pub struct MockCommit {
    pub id: String,
    pub subject: String,
    pub body: String,
}

/// Mock repository for testing without actual git operations
///
/// History is linear; commits are added oldest first and HEAD is the last one.
pub struct MockRepository {
    commits: Vec<MockCommit>,
    tags: HashMap<String, String>,
    requested_ranges: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            requested_ranges: RefCell::new(Vec::new()),
        }
    }

    /// Add a commit on top of the current HEAD
    pub fn add_commit(
        &mut self,
        id: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) {
        self.commits.push(MockCommit {
            id: id.into(),
            subject: subject.into(),
            body: body.into(),
        });
    }

    /// Add a pull request merge commit with the given body
    pub fn add_merge(&mut self, id: impl Into<String>, body: impl Into<String>) {
        let id = id.into();
        let subject = format!("Merge pull request #{} from org/branch", self.commits.len() + 1);
        self.add_commit(id, subject, body);
    }

    /// Tag the current HEAD
    pub fn tag_head(&mut self, name: impl Into<String>) {
        let head = self.commits.last().map(|c| c.id.clone()).unwrap_or_default();
        self.tags.insert(name.into(), head);
    }

    /// Ranges passed to [Repository::merge_commits], in call order
    pub fn requested_ranges(&self) -> Vec<String> {
        self.requested_ranges.borrow().clone()
    }

    /// Commits in the range, newest first, mirroring `git log`
    fn commits_in(&self, range: &CommitRange) -> Result<Vec<&MockCommit>> {
        let newest_first = self.commits.iter().rev();

        match range {
            CommitRange::SinceTag(name) => {
                let target = self.tags.get(name).ok_or_else(|| {
                    ReleaseNotesError::command(
                        format!("git log {}", range),
                        format!("unknown revision '{}'", name),
                    )
                })?;
                Ok(newest_first.take_while(|c| &c.id != target).collect())
            }
            CommitRange::Recent(n) => {
                let n = *n as usize;
                // HEAD~n only resolves when at least n + 1 commits exist
                if self.commits.len() <= n {
                    return Err(ReleaseNotesError::command(
                        format!("git log {}", range),
                        format!("unknown revision 'HEAD~{}'", n),
                    ));
                }
                Ok(newest_first.take(n).collect())
            }
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let pattern = glob::Pattern::new(pattern)
            .map_err(|e| ReleaseNotesError::pattern(format!("Invalid tag glob: {}", e)))?;

        let mut tags: Vec<String> = self
            .tags
            .keys()
            .filter(|name| pattern.matches(name))
            .cloned()
            .collect();
        tag::sort_descending(&mut tags);

        Ok(tags)
    }

    fn merge_commits(&self, range: &CommitRange, subject_prefix: &str) -> Result<Vec<String>> {
        self.requested_ranges.borrow_mut().push(range.revspec());

        Ok(self
            .commits_in(range)?
            .into_iter()
            .filter(|c| c.subject.starts_with(subject_prefix))
            .map(|c| c.id.clone())
            .collect())
    }

    fn commit_body(&self, commit_id: &str) -> Result<String> {
        self.commits
            .iter()
            .find(|c| c.id == commit_id)
            .map(|c| c.body.clone())
            .ok_or_else(|| {
                ReleaseNotesError::command(
                    format!("git log -n 1 {}", commit_id),
                    format!("bad object {}", commit_id),
                )
            })
    }
}
