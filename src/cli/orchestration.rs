//! Main workflow orchestration logic
//!
//! Keeps argument parsing in `main.rs` separate from the extraction run, so
//! the workflow can be called programmatically without depending on clap.

use std::path::PathBuf;

use chrono::Utc;

use crate::config::Config;
use crate::error::Result;
use crate::extractor::{
    self, ExtractionInput, ExtractionResult, ExtractorSettings, ReleaseNoteExtractor, Screening,
};
use crate::git::{self, Backend, Repository};

/// Arguments for the extraction workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractWorkflowArgs {
    /// Any path inside the repository to scan
    pub repo_path: PathBuf,

    /// Backend override; `None` uses the configured backend
    pub backend: Option<Backend>,

    pub input: ExtractionInput,
}

/// Main extraction workflow
///
/// 1. Settle the manual-label and unsupported-branch returns from the inputs
/// 2. Pick the git backend (argument, then configuration)
/// 3. Open the repository
/// 4. Scan it with the configured settings
pub fn run_extract_workflow(args: &ExtractWorkflowArgs, config: &Config) -> Result<ExtractionResult> {
    let pending = match extractor::screen(&args.input, Utc::now()) {
        Screening::Finished(result) => return Ok(result),
        Screening::Scan(pending) => pending,
    };

    let backend = args.backend.unwrap_or(config.behavior.backend);
    let repo = git::open(backend, &args.repo_path)?;

    let extractor = ReleaseNoteExtractor::new(&*repo, ExtractorSettings::from_config(config))?;
    extractor.complete(pending)
}

/// Run the extractor against an already opened repository
pub fn run_with_repository<R: Repository + ?Sized>(
    repo: &R,
    input: &ExtractionInput,
    config: &Config,
) -> Result<ExtractionResult> {
    let extractor = ReleaseNoteExtractor::new(repo, ExtractorSettings::from_config(config))?;
    extractor.extract(input)
}
