//! Release-note extraction from pull request merge commits.
//!
//! Each run takes exactly one of three paths: an early return when a manual
//! label is present, an early return for an unsupported base branch, or a
//! full scan of the merge commits since the last release tag. [screen]
//! decides the early returns from the inputs alone, so callers can skip
//! opening a repository; [ReleaseNoteExtractor::complete] runs the scan.
//! All accumulation happens in an [ExtractionContext] that is threaded
//! through the steps and turned into an [ExtractionResult].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{
    commit, CommitRange, IssueMatcher, IssueReference, ReleaseBranch, TagPrefix, TrackerLinks,
};
use crate::error::Result;
use crate::git::Repository;

/// Notes used for both documents when no issue was found in the range
pub const FALLBACK_NOTES: &str = "No matching pull requests merged in this release.";

/// Inputs of one extraction, usually taken from CI variables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionInput {
    /// Label that overrides automated extraction when non-empty
    pub manual_label: String,
    /// Branch the pull requests were merged into
    pub base_branch: String,
    /// Project key used as tag prefix (`<project>-v`)
    pub project: String,
}

impl ExtractionInput {
    pub fn new(
        manual_label: impl Into<String>,
        base_branch: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        ExtractionInput {
            manual_label: manual_label.into(),
            base_branch: base_branch.into(),
            project: project.into(),
        }
    }
}

/// Outcome of one extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// HTML headings linking each issue, for GitHub releases
    pub github_notes: String,
    /// Plain id/title/link blocks, for the wiki page
    pub notion_notes: String,
    /// Start of the run, RFC 3339 with millisecond precision
    pub current_date: String,
    pub message_log: Vec<String>,
    /// Commit ids without a body, and body lines not matching the issue format
    pub skipped_commits: Vec<String>,
}

/// Mutable state of one extraction run
#[derive(Debug)]
struct ExtractionContext {
    github_notes: String,
    notion_notes: String,
    current_date: String,
    message_log: Vec<String>,
    skipped_commits: Vec<String>,
}

impl ExtractionContext {
    fn new(started_at: DateTime<Utc>) -> Self {
        ExtractionContext {
            github_notes: String::new(),
            notion_notes: String::new(),
            current_date: started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            message_log: Vec::new(),
            skipped_commits: Vec::new(),
        }
    }

    fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "extraction log");
        self.message_log.push(message);
    }

    fn skip_without_body(&mut self, commit_id: &str) {
        self.skipped_commits.push(commit_id.to_string());
        self.log(format!("Skipping (no body): {}", commit_id));
    }

    fn skip_unmatched(&mut self, line: &str, issue_prefix: &str) {
        self.skipped_commits.push(line.to_string());
        self.log(format!(
            "Skipping (not {} format): {}",
            issue_prefix, line
        ));
    }

    /// Append one issue to both documents together
    fn record_issue(&mut self, issue: &IssueReference, url: &str) {
        self.log(format!("Found: {} - {}", issue.id, issue.title));
        self.github_notes.push_str(&issue.github_entry(url));
        self.notion_notes.push_str(&issue.notion_entry(url));
    }

    fn apply_fallback(&mut self, issue_prefix: &str) {
        if self.github_notes.is_empty() && self.notion_notes.is_empty() {
            self.log(format!(
                "No {}-prefixed commits found in the range",
                issue_prefix
            ));
            self.github_notes = FALLBACK_NOTES.to_string();
            self.notion_notes = FALLBACK_NOTES.to_string();
        }
    }

    fn finish(self) -> ExtractionResult {
        ExtractionResult {
            github_notes: self.github_notes,
            notion_notes: self.notion_notes,
            current_date: self.current_date,
            message_log: self.message_log,
            skipped_commits: self.skipped_commits,
        }
    }
}

/// Outcome of checking the inputs before any repository access
#[derive(Debug)]
pub enum Screening {
    /// Manual label or unsupported branch: the result is final
    Finished(ExtractionResult),
    /// The merge history has to be scanned
    Scan(PendingScan),
}

/// A run that passed [screen] and waits for [ReleaseNoteExtractor::complete]
#[derive(Debug)]
pub struct PendingScan {
    branch: ReleaseBranch,
    prefix: TagPrefix,
    ctx: ExtractionContext,
}

impl PendingScan {
    pub fn branch(&self) -> ReleaseBranch {
        self.branch
    }
}

/// Record the inputs and settle the early returns, stamped with `started_at`
pub fn screen(input: &ExtractionInput, started_at: DateTime<Utc>) -> Screening {
    let mut ctx = ExtractionContext::new(started_at);
    ctx.log(format!(
        "Inputs: manual_label=\"{}\", base_branch=\"{}\", project=\"{}\"",
        input.manual_label, input.base_branch, input.project
    ));

    if !input.manual_label.is_empty() {
        info!(label = %input.manual_label, "manual label set, skipping extraction");
        ctx.log("Manual label provided, skipping automated extraction.");
        return Screening::Finished(ctx.finish());
    }

    let Some(branch) = ReleaseBranch::parse(&input.base_branch) else {
        warn!(branch = %input.base_branch, "unsupported base branch");
        ctx.log(format!(
            "Unsupported branch for release notes: {}",
            input.base_branch
        ));
        return Screening::Finished(ctx.finish());
    };

    Screening::Scan(PendingScan {
        branch,
        prefix: TagPrefix::for_project(&input.project),
        ctx,
    })
}

/// Settings the extractor needs from [Config]
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorSettings {
    pub fallback_window: u32,
    pub merge_subject_prefix: String,
    pub issue_prefix: String,
    pub tracker: TrackerLinks,
}

impl ExtractorSettings {
    pub fn from_config(config: &Config) -> Self {
        ExtractorSettings {
            fallback_window: config.scan.fallback_window,
            merge_subject_prefix: config.scan.merge_subject_prefix.clone(),
            issue_prefix: config.tracker.issue_prefix.clone(),
            tracker: TrackerLinks::new(
                config.tracker.base_url.clone(),
                config.tracker.organization.clone(),
            ),
        }
    }
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Builds release notes from the merge history of a repository
pub struct ReleaseNoteExtractor<'r, R: Repository + ?Sized> {
    repo: &'r R,
    settings: ExtractorSettings,
    matcher: IssueMatcher,
}

impl<'r, R: Repository + ?Sized> ReleaseNoteExtractor<'r, R> {
    pub fn new(repo: &'r R, settings: ExtractorSettings) -> Result<Self> {
        let matcher = IssueMatcher::new(&settings.issue_prefix)?;
        Ok(ReleaseNoteExtractor {
            repo,
            settings,
            matcher,
        })
    }

    /// Run an extraction stamped with the current time
    pub fn extract(&self, input: &ExtractionInput) -> Result<ExtractionResult> {
        self.extract_at(input, Utc::now())
    }

    /// Run an extraction stamped with `started_at`
    ///
    /// # Returns
    /// * `Ok(ExtractionResult)` - Notes, or empty notes with an explanatory log entry
    ///   when the manual label is set or the branch is unsupported
    /// * `Err` - If a git query fails
    pub fn extract_at(
        &self,
        input: &ExtractionInput,
        started_at: DateTime<Utc>,
    ) -> Result<ExtractionResult> {
        match screen(input, started_at) {
            Screening::Finished(result) => Ok(result),
            Screening::Scan(pending) => self.complete(pending),
        }
    }

    /// Resolve the range for a screened run and scan its merge commits
    pub fn complete(&self, pending: PendingScan) -> Result<ExtractionResult> {
        let PendingScan {
            branch,
            prefix,
            mut ctx,
        } = pending;

        let range = self.resolve_range(&mut ctx, branch, &prefix)?;
        self.scan(&mut ctx, &range)?;

        ctx.apply_fallback(self.matcher.prefix());
        Ok(ctx.finish())
    }

    fn resolve_range(
        &self,
        ctx: &mut ExtractionContext,
        branch: ReleaseBranch,
        prefix: &TagPrefix,
    ) -> Result<CommitRange> {
        let last_tag = branch.resolve_last_tag(self.repo, prefix)?;

        match &last_tag {
            Some(tag) => ctx.log(format!("Last release tag found: {}", tag)),
            None => ctx.log(format!(
                "No previous release tag found, using last {} commits",
                self.settings.fallback_window
            )),
        }

        let range = CommitRange::from_last_tag(last_tag, self.settings.fallback_window);
        ctx.log(format!("Extracting merge commits from range: {}", range));
        Ok(range)
    }

    fn scan(&self, ctx: &mut ExtractionContext, range: &CommitRange) -> Result<()> {
        let commit_ids = self
            .repo
            .merge_commits(range, &self.settings.merge_subject_prefix)?;
        info!(%range, count = commit_ids.len(), "scanning merge commits");

        for commit_id in &commit_ids {
            let body = self.repo.commit_body(commit_id)?;

            let Some(line) = commit::headline(&body) else {
                ctx.skip_without_body(commit_id);
                continue;
            };

            match self.matcher.parse(line) {
                Some(issue) => {
                    let url = self.settings.tracker.issue_url(&issue.id);
                    ctx.record_issue(&issue, &url);
                }
                None => ctx.skip_unmatched(line, self.matcher.prefix()),
            }
        }

        Ok(())
    }
}
