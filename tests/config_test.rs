// tests/config_test.rs
use release_notes::config::{load_config, Config};
use release_notes::git::Backend;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.tracker.organization, "piaspace");
    assert_eq!(config.scan.fallback_window, 100);
    assert_eq!(config.behavior.backend, Backend::Git2);
}

#[test]
fn test_load_from_file() {
    let temp_file = write_config(
        r#"
[tracker]
base_url = "https://linear.example.com"
organization = "acme"
issue_prefix = "OPS"

[scan]
fallback_window = 250
merge_subject_prefix = "Merged PR"

[behavior]
backend = "cli"
"#,
    );

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tracker.base_url, "https://linear.example.com");
    assert_eq!(config.tracker.organization, "acme");
    assert_eq!(config.tracker.issue_prefix, "OPS");
    assert_eq!(config.scan.fallback_window, 250);
    assert_eq!(config.scan.merge_subject_prefix, "Merged PR");
    assert_eq!(config.behavior.backend, Backend::Cli);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let temp_file = write_config("[tracker]\norganization = \"acme\"\n");

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tracker.organization, "acme");
    assert_eq!(config.tracker.issue_prefix, "SYS");
    assert_eq!(config.scan, Config::default().scan);
}

#[test]
fn test_invalid_values_are_rejected() {
    let temp_file = write_config("[scan]\nfallback_window = 0\n");

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("fallback_window"));
}

#[test]
fn test_unknown_backend_is_rejected() {
    let temp_file = write_config("[behavior]\nbackend = \"hg\"\n");

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}
