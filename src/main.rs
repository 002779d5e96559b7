use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_notes::cli::{run_extract_workflow, Args};
use release_notes::config;
use release_notes::output::{self, OutputFormat};
use release_notes::ui;
use release_notes::ExtractionResult;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{}", e));
        std::process::exit(1);
    }
}

/// Console logging on stderr, controlled by RUST_LOG (default: warn, or debug with --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .map_err(|e| anyhow!("Error loading config: {}", e))?;

    let workflow = args.workflow_args();
    ui::display_status(&format!(
        "Extracting release notes for '{}' on '{}'",
        workflow.input.project, workflow.input.base_branch
    ));
    let result = run_extract_workflow(&workflow, &config).map_err(|e| {
        anyhow!(
            "Release note extraction failed for project '{}' on '{}': {}",
            workflow.input.project,
            workflow.input.base_branch,
            e
        )
    })?;

    emit(args, &result)
}

fn emit(args: &Args, result: &ExtractionResult) -> Result<()> {
    match args.format {
        OutputFormat::Text => {
            print!("{}", output::render_text(result));
        }
        OutputFormat::Json => {
            println!("{}", output::render_json(result)?);
        }
        OutputFormat::Github => {
            ui::display_message_log(&result.message_log);
            ui::display_skipped(&result.skipped_commits);

            match &args.github_output {
                Some(path) => {
                    output::write_github_outputs(result, path)?;
                    ui::display_success(&format!("Wrote step outputs to {}", path.display()));
                }
                None => {
                    ui::display_warning("GITHUB_OUTPUT is not set, printing step outputs");
                    print!("{}", output::render_github_outputs(result));
                }
            }
        }
    }

    Ok(())
}
