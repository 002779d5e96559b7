use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command `{command}` failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Pattern(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Output(msg.into())
    }

    /// Create a failed-command error from the rendered command line and its stderr
    pub fn command(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        ReleaseNotesError::Command {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseNotesError::config("fallback_window must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: fallback_window must be positive"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseNotesError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_command_error_includes_command_and_stderr() {
        let err = ReleaseNotesError::command(
            "git log HEAD~100..HEAD",
            "fatal: ambiguous argument 'HEAD~100..HEAD'",
        );
        let msg = err.to_string();
        assert!(msg.contains("git log HEAD~100..HEAD"));
        assert!(msg.contains("ambiguous argument"));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: ReleaseNotesError = parse_err.into();
        assert!(err.to_string().starts_with("Configuration parse error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseNotesError::config("x"), "Configuration error"),
            (ReleaseNotesError::pattern("x"), "Pattern error"),
            (ReleaseNotesError::output("x"), "Output error"),
            (ReleaseNotesError::command("git", "x"), "Git command"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
