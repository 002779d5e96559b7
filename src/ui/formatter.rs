//! Pure formatting functions for terminal output.
//!
//! Status lines go to stderr so stdout stays clean for rendered notes.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Format and print a warning with yellow warning sign.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Echo the extraction log, one entry per line.
pub fn display_message_log(message_log: &[String]) {
    eprintln!("\n{}", style("Extraction log").bold());
    for line in message_log {
        eprintln!("  {}", line);
    }
}

/// Summarize what was skipped, showing at most 10 entries.
pub fn display_skipped(skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }

    eprintln!("\n{}", style(format!("Skipped {} item(s):", skipped.len())).underlined());
    for item in skipped.iter().take(10) {
        eprintln!("  - {}", item);
    }

    if skipped.len() > 10 {
        eprintln!("  ... and {} more", skipped.len() - 10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_skipped_truncates() {
        let skipped: Vec<String> = (0..12).map(|i| format!("commit {}", i)).collect();
        display_skipped(&skipped);
        display_skipped(&[]);
    }
}
