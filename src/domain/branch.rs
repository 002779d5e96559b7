use std::fmt;

use crate::domain::tag::{self, TagPrefix};
use crate::error::Result;
use crate::git::Repository;

/// Base branches that release notes can be generated for.
///
/// Each branch carries its own policy for finding the previous release tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseBranch {
    /// Pre-release branch, tagged with `-rc` candidates
    Stage,
    /// Production branch, tagged with final versions
    Master,
}

impl ReleaseBranch {
    /// Map a branch name to its release policy, or `None` if unsupported
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stage" => Some(ReleaseBranch::Stage),
            "master" => Some(ReleaseBranch::Master),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReleaseBranch::Stage => "stage",
            ReleaseBranch::Master => "master",
        }
    }

    /// Glob passed to the tag listing for this branch
    pub fn tag_glob(&self, prefix: &TagPrefix) -> String {
        match self {
            ReleaseBranch::Stage => prefix.glob_release_candidates(),
            ReleaseBranch::Master => prefix.glob_all(),
        }
    }

    /// Pick the last release tag from a list already sorted highest first.
    pub fn select_last_tag(&self, tags: &[String]) -> Option<String> {
        match self {
            ReleaseBranch::Stage => tags.first().cloned(),
            ReleaseBranch::Master => tags.iter().find(|t| !tag::is_prerelease(t)).cloned(),
        }
    }

    /// Query the repository for the last release tag relevant to this branch
    pub fn resolve_last_tag<R: Repository + ?Sized>(
        &self,
        repo: &R,
        prefix: &TagPrefix,
    ) -> Result<Option<String>> {
        let tags = repo.list_tags(&self.tag_glob(prefix))?;
        tracing::debug!(branch = self.name(), candidates = tags.len(), "listed tags");
        Ok(self.select_last_tag(&tags))
    }
}

impl fmt::Display for ReleaseBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_supported_branches() {
        assert_eq!(ReleaseBranch::parse("stage"), Some(ReleaseBranch::Stage));
        assert_eq!(ReleaseBranch::parse("master"), Some(ReleaseBranch::Master));
    }

    #[test]
    fn test_parse_unsupported_branches() {
        assert_eq!(ReleaseBranch::parse("main"), None);
        assert_eq!(ReleaseBranch::parse("develop"), None);
        assert_eq!(ReleaseBranch::parse("Stage"), None);
        assert_eq!(ReleaseBranch::parse(""), None);
    }

    #[test]
    fn test_tag_glob_per_branch() {
        let prefix = TagPrefix::for_project("web");
        assert_eq!(ReleaseBranch::Stage.tag_glob(&prefix), "web-v*-rc*");
        assert_eq!(ReleaseBranch::Master.tag_glob(&prefix), "web-v*");
    }

    #[test]
    fn test_stage_takes_highest_candidate() {
        let sorted = tags(&["web-v1.3.0-rc2", "web-v1.3.0-rc1", "web-v1.2.0-rc4"]);
        assert_eq!(
            ReleaseBranch::Stage.select_last_tag(&sorted),
            Some("web-v1.3.0-rc2".to_string())
        );
    }

    #[test]
    fn test_master_skips_prerelease_tags() {
        let sorted = tags(&[
            "web-v1.3.0-rc2",
            "web-v1.3.0-dev7",
            "web-v1.2.1",
            "web-v1.2.0",
        ]);
        assert_eq!(
            ReleaseBranch::Master.select_last_tag(&sorted),
            Some("web-v1.2.1".to_string())
        );
    }

    #[test]
    fn test_master_with_only_prereleases() {
        let sorted = tags(&["web-v1.0.0-rc1", "web-v1.0.0-dev1"]);
        assert_eq!(ReleaseBranch::Master.select_last_tag(&sorted), None);
    }

    #[test]
    fn test_empty_tag_list() {
        assert_eq!(ReleaseBranch::Stage.select_last_tag(&[]), None);
        assert_eq!(ReleaseBranch::Master.select_last_tag(&[]), None);
    }
}
