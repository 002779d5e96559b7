pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod git;
pub mod output;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
pub use extractor::{ExtractionInput, ExtractionResult, ReleaseNoteExtractor};
