use std::fmt;

/// Commit range scanned for merge commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// Everything after the given tag up to HEAD
    SinceTag(String),
    /// The last `n` commits before HEAD, used when no release tag exists
    Recent(u32),
}

impl CommitRange {
    pub fn from_last_tag(last_tag: Option<String>, fallback_window: u32) -> Self {
        match last_tag {
            Some(tag) => CommitRange::SinceTag(tag),
            None => CommitRange::Recent(fallback_window),
        }
    }

    /// Revision range in git syntax (e.g., "api-v1.2.0..HEAD")
    pub fn revspec(&self) -> String {
        match self {
            CommitRange::SinceTag(tag) => format!("{}..HEAD", tag),
            CommitRange::Recent(n) => format!("HEAD~{}..HEAD", n),
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.revspec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_since_tag() {
        let range = CommitRange::from_last_tag(Some("api-v1.2.0".to_string()), 100);
        assert_eq!(range, CommitRange::SinceTag("api-v1.2.0".to_string()));
        assert_eq!(range.revspec(), "api-v1.2.0..HEAD");
    }

    #[test]
    fn test_range_falls_back_to_window() {
        let range = CommitRange::from_last_tag(None, 100);
        assert_eq!(range, CommitRange::Recent(100));
        assert_eq!(range.to_string(), "HEAD~100..HEAD");
    }
}
