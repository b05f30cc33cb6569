use appiumize_core::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Appiumize
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppiumizeConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: String,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl Default for AppiumizeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            settings: Settings::default(),
        }
    }
}

/// Settings shared by the CLI and the tool server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Platform used when a command does not name one
    #[serde(default)]
    pub default_platform: Platform,

    /// Prefix of the output file name when `convert` gets no `--output`
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Directory for server log files; relative paths resolve against the
    /// working directory
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Base log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extra TOML rule files loaded after the built-in catalog
    #[serde(default)]
    pub rule_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_platform: Platform::default(),
            output_prefix: default_output_prefix(),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
            rule_files: Vec::new(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_output_prefix() -> String {
    "converted_".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}
