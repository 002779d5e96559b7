use std::path::PathBuf;

use clap::Parser;

use crate::cli::orchestration::ExtractWorkflowArgs;
use crate::extractor::ExtractionInput;
use crate::git::Backend;
use crate::output::OutputFormat;

/// Command line arguments; every input can also come from the CI environment
#[derive(Debug, Parser)]
#[command(
    name = "release-notes",
    version,
    about = "Extract release notes from pull requests merged since the last release tag"
)]
pub struct Args {
    #[arg(
        long,
        env = "MANUAL_LABEL",
        default_value = "",
        help = "Manual release label; when set, automated extraction is skipped"
    )]
    pub manual_label: String,

    #[arg(short, long, env = "BASE_BRANCH", help = "Base branch: stage or master")]
    pub base_branch: String,

    #[arg(short, long, env = "PROJECT", help = "Project key used as tag prefix (<project>-v)")]
    pub project: String,

    #[arg(short, long, env = "RELEASE_NOTES_CONFIG", help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    pub repo: PathBuf,

    #[arg(long, value_enum, help = "Git backend, overrides the configuration")]
    pub backend: Option<Backend>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(
        long,
        env = "GITHUB_OUTPUT",
        help = "File receiving step outputs with --format github"
    )]
    pub github_output: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    /// Workflow arguments, decoupled from clap
    pub fn workflow_args(&self) -> ExtractWorkflowArgs {
        ExtractWorkflowArgs {
            repo_path: self.repo.clone(),
            backend: self.backend,
            input: ExtractionInput::new(
                self.manual_label.clone(),
                self.base_branch.clone(),
                self.project.clone(),
            ),
        }
    }
}
