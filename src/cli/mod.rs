//! Command line surface: argument parsing and workflow orchestration.

pub mod args;
pub mod orchestration;

pub use args::Args;
pub use orchestration::{run_extract_workflow, run_with_repository, ExtractWorkflowArgs};
