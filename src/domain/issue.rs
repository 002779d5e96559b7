use regex::Regex;

use crate::error::{ReleaseNotesError, Result};

/// Issue reference found at the start of a merge commit body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReference {
    pub id: String,
    pub title: String,
}

/// Matches lines of the form `<PREFIX><LETTERS>-<DIGITS> <title>`
#[derive(Debug, Clone)]
pub struct IssueMatcher {
    prefix: String,
    pattern: Regex,
}

impl IssueMatcher {
    /// Build a matcher for the given issue key prefix (e.g., "SYS")
    pub fn new(prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(ReleaseNotesError::pattern("Issue prefix must not be empty"));
        }

        let pattern = format!(r"^({}[A-Z]+-[0-9]+)\s+(.+)$", regex::escape(prefix));
        let pattern = Regex::new(&pattern)
            .map_err(|e| ReleaseNotesError::pattern(format!("Invalid issue pattern: {}", e)))?;

        Ok(IssueMatcher {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn parse(&self, line: &str) -> Option<IssueReference> {
        let captures = self.pattern.captures(line)?;
        Some(IssueReference {
            id: captures.get(1)?.as_str().to_string(),
            title: captures.get(2)?.as_str().to_string(),
        })
    }
}

/// Builds issue links for the tracker (`<base_url>/<organization>/issue/<ID>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerLinks {
    pub base_url: String,
    pub organization: String,
}

impl TrackerLinks {
    pub fn new(base_url: impl Into<String>, organization: impl Into<String>) -> Self {
        TrackerLinks {
            base_url: base_url.into(),
            organization: organization.into(),
        }
    }

    pub fn issue_url(&self, issue_id: &str) -> String {
        format!(
            "{}/{}/issue/{}",
            self.base_url.trim_end_matches('/'),
            self.organization,
            issue_id
        )
    }
}

impl IssueReference {
    /// Heading entry for GitHub release notes
    pub fn github_entry(&self, url: &str) -> String {
        format!(
            "### <a href=\"{}\">{} {}</a>\n",
            url, self.id, self.title
        )
    }

    /// Plain entry for the wiki page: id and title, then the link, then a blank line
    pub fn notion_entry(&self, url: &str) -> String {
        format!("{} {}\n{}\n\n", self.id, self.title, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> IssueMatcher {
        IssueMatcher::new("SYS").unwrap()
    }

    #[test]
    fn test_parse_issue_line() {
        let issue = matcher().parse("SYSAPI-42 Fix login bug").unwrap();
        assert_eq!(issue.id, "SYSAPI-42");
        assert_eq!(issue.title, "Fix login bug");
    }

    #[test]
    fn test_parse_requires_letters_after_prefix() {
        assert_eq!(matcher().parse("SYS-42 Fix login bug"), None);
    }

    #[test]
    fn test_parse_requires_title() {
        assert_eq!(matcher().parse("SYSAPI-42"), None);
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert_eq!(matcher().parse("Update README"), None);
        assert_eq!(matcher().parse("sysapi-42 lower case"), None);
        assert_eq!(matcher().parse("See SYSAPI-42 Fix"), None);
    }

    #[test]
    fn test_custom_prefix_is_escaped() {
        let matcher = IssueMatcher::new("A.B").unwrap();
        assert!(matcher.parse("A.BX-1 Title").is_some());
        assert!(matcher.parse("AzBX-1 Title").is_none());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(IssueMatcher::new("").is_err());
    }

    #[test]
    fn test_issue_url() {
        let links = TrackerLinks::new("https://linear.app/", "piaspace");
        assert_eq!(
            links.issue_url("SYSAPI-42"),
            "https://linear.app/piaspace/issue/SYSAPI-42"
        );
    }

    #[test]
    fn test_entries() {
        let issue = IssueReference {
            id: "SYSAPI-42".to_string(),
            title: "Fix login bug".to_string(),
        };
        let url = "https://linear.app/piaspace/issue/SYSAPI-42";

        assert_eq!(
            issue.github_entry(url),
            "### <a href=\"https://linear.app/piaspace/issue/SYSAPI-42\">SYSAPI-42 Fix login bug</a>\n"
        );
        assert_eq!(
            issue.notion_entry(url),
            "SYSAPI-42 Fix login bug\nhttps://linear.app/piaspace/issue/SYSAPI-42\n\n"
        );
    }
}
