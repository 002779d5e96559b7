//! User interface module - terminal status output.

pub mod formatter;

pub use formatter::{
    display_error, display_message_log, display_skipped, display_status, display_success,
    display_warning,
};
