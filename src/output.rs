//! Rendering of an [ExtractionResult] for people and for CI.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{ReleaseNotesError, Result};
use crate::extractor::ExtractionResult;

const DELIMITER_BASE: &str = "RELEASE_NOTES_EOF";

/// How the result is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Log, notes and skipped items under headings
    #[default]
    Text,
    /// Pretty-printed JSON with camelCase keys
    Json,
    /// GitHub Actions step outputs (`name<<DELIMITER` blocks)
    Github,
}

/// Human-readable report
pub fn render_text(result: &ExtractionResult) -> String {
    let mut out = String::new();

    out.push_str("== Log ==\n");
    for line in &result.message_log {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str("\n== GitHub notes ==\n");
    out.push_str(result.github_notes.trim_end());
    out.push('\n');

    out.push_str("\n== Notion notes ==\n");
    out.push_str(result.notion_notes.trim_end());
    out.push('\n');

    if !result.skipped_commits.is_empty() {
        out.push_str("\n== Skipped ==\n");
        for item in &result.skipped_commits {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
    }

    out.push_str(&format!("\nGenerated at {}\n", result.current_date));
    out
}

pub fn render_json(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Step outputs in the multi-line `GITHUB_OUTPUT` syntax
pub fn render_github_outputs(result: &ExtractionResult) -> String {
    let outputs = [
        ("github_notes", result.github_notes.clone()),
        ("notion_notes", result.notion_notes.clone()),
        ("current_date", result.current_date.clone()),
        ("message_log", result.message_log.join("\n")),
        ("skipped_commits", result.skipped_commits.join("\n")),
    ];

    let mut out = String::new();
    for (name, value) in outputs {
        let delimiter = delimiter_for(&value);
        out.push_str(&format!("{}<<{}\n", name, delimiter));
        // The newline before the closing delimiter is not part of the value
        if !value.is_empty() {
            out.push_str(&value);
            out.push('\n');
        }
        out.push_str(&delimiter);
        out.push('\n');
    }
    out
}

/// Append step outputs to the file GitHub Actions reads after the step
pub fn write_github_outputs(result: &ExtractionResult, path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ReleaseNotesError::output(format!("Cannot open {}: {}", path.display(), e))
        })?;

    file.write_all(render_github_outputs(result).as_bytes())?;
    tracing::debug!(path = %path.display(), "wrote step outputs");
    Ok(())
}

/// A delimiter line that does not occur anywhere in `value`
fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_string();
    let mut n = 0;
    while value.contains(&delimiter) {
        n += 1;
        delimiter = format!("{}_{}", DELIMITER_BASE, n);
    }
    delimiter
}
