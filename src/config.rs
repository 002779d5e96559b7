use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseNotesError, Result};
use crate::git::Backend;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "releasenotes.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releasenotes.toml";

/// Represents the complete configuration for release-notes.
///
/// Contains the issue tracker settings, commit scanning settings and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_base_url() -> String {
    "https://linear.app".to_string()
}

fn default_organization() -> String {
    "piaspace".to_string()
}

fn default_issue_prefix() -> String {
    "SYS".to_string()
}

fn default_fallback_window() -> u32 {
    100
}

fn default_merge_subject_prefix() -> String {
    "Merge pull request".to_string()
}

/// Issue tracker the release notes link to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TrackerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_organization")]
    pub organization: String,

    /// Leading letters of issue keys (e.g., "SYS" matches "SYSAPI-42")
    #[serde(default = "default_issue_prefix")]
    pub issue_prefix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            base_url: default_base_url(),
            organization: default_organization(),
            issue_prefix: default_issue_prefix(),
        }
    }
}

/// Which commits are scanned.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScanConfig {
    /// Number of commits before HEAD scanned when no release tag exists
    #[serde(default = "default_fallback_window")]
    pub fallback_window: u32,

    #[serde(default = "default_merge_subject_prefix")]
    pub merge_subject_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            fallback_window: default_fallback_window(),
            merge_subject_prefix: default_merge_subject_prefix(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub backend: Backend,
}

impl Config {
    /// Reject settings the extractor cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.scan.fallback_window == 0 {
            return Err(ReleaseNotesError::config(
                "scan.fallback_window must be greater than zero",
            ));
        }

        let required = [
            ("tracker.base_url", &self.tracker.base_url),
            ("tracker.organization", &self.tracker.organization),
            ("tracker.issue_prefix", &self.tracker.issue_prefix),
            ("scan.merge_subject_prefix", &self.scan.merge_subject_prefix),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ReleaseNotesError::config(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasenotes.toml` in current directory
/// 3. `.releasenotes.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
