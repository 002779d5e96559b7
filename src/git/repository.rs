use crate::domain::{tag, CommitRange};
use crate::error::Result;
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let names = self.repo.tag_names(Some(pattern))?;

        let mut tags: Vec<String> = names.iter().flatten().map(|s| s.to_string()).collect();
        tag::sort_descending(&mut tags);

        Ok(tags)
    }

    fn merge_commits(&self, range: &CommitRange, subject_prefix: &str) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk.push_range(&range.revspec())?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            let commit = self.repo.find_commit(oid)?;

            if commit
                .summary()
                .is_some_and(|subject| subject.starts_with(subject_prefix))
            {
                commits.push(oid.to_string());
            }
        }

        tracing::debug!(range = %range, count = commits.len(), "walked merge commits");
        Ok(commits)
    }

    fn commit_body(&self, commit_id: &str) -> Result<String> {
        let oid = Oid::from_str(commit_id)?;
        let commit = self.repo.find_commit(oid)?;

        Ok(commit.body().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use git2::Signature;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = Signature::now("Release Bot", "bot@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Git2Repository::open(dir.path()).is_err());
    }

    #[test]
    fn test_list_tags_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oid = commit(&repo, "initial");
        {
            let object = repo.find_object(oid, None).unwrap();
            for name in ["api-v1.9.0", "api-v1.10.0", "web-v2.0.0", "api-v1.10.0-rc1"] {
                repo.tag_lightweight(name, &object, false).unwrap();
            }
        }

        let repo = Git2Repository::from_git2(repo);
        assert_eq!(
            repo.list_tags("api-v*").unwrap(),
            vec!["api-v1.10.0-rc1", "api-v1.10.0", "api-v1.9.0"]
        );
        assert_eq!(repo.list_tags("api-v*-rc*").unwrap(), vec!["api-v1.10.0-rc1"]);
    }

    #[test]
    fn test_commit_body_without_body_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oid = commit(&repo, "Merge pull request #1 from org/feature");

        let repo = Git2Repository::from_git2(repo);
        assert_eq!(repo.commit_body(&oid.to_string()).unwrap(), "");
    }
}
